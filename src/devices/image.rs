//! Flash banks and the firmware images stored in them.
use crate::hal::flash::Address;

/// A region of MCU flash reserved for one firmware image and its signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bank {
    pub location: Address,
    pub size: usize,
    /// Largest firmware that fits while leaving room for its signature.
    pub max_image_size: usize,
}

impl Bank {
    pub fn end(&self) -> Address { self.location + self.size }
    pub fn contains(&self, address: Address) -> bool {
        address >= self.location && address < self.end()
    }

    /// Describes an image of `size` bytes placed at the start of this bank,
    /// with its signature right after it on the next word boundary.
    pub fn image(&self, size: usize, signature_length: usize) -> Image {
        Image {
            location: self.location,
            size,
            signature_location: (self.location + size).align_up(),
            signature_length,
        }
    }
}

/// Image descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Image {
    pub location: Address,
    pub size: usize,
    pub signature_location: Address,
    pub signature_length: usize,
}

impl Image {
    /// First address past the signature.
    pub fn end(&self) -> Address { self.signature_location + self.signature_length }

    /// Span from the start of the firmware to the end of the signature.
    pub fn footprint(&self) -> usize { self.end() - self.location }

    /// The same image relocated to the start of `bank`.
    pub fn relocated(&self, bank: &Bank) -> Image { bank.image(self.size, self.signature_length) }
}
