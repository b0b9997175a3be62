//! Fixed capacity unsigned big integers.
//!
//! Values live entirely on the stack and are copied by assignment. Words
//! are stored least significant first, and every operation leaves the
//! result normalized: `length` counts significant words only, except for
//! zero, which is represented by a single zero word.
use core::{cmp::Ordering, fmt};

/// Number of 32-bit words a `BigInt` can hold (4096 bits), enough for the
/// full width product of two 2048-bit operands.
pub const MAX_WORDS: usize = 128;

/// Capacity in bytes, as consumed by `from_bytes`.
pub const MAX_BYTES: usize = MAX_WORDS * 4;

const WORD_BITS: usize = 32;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    DivisionByZero,
    /// The result would not fit in `MAX_WORDS` words, or a subtraction
    /// would have produced a negative value.
    Overflow,
    /// The operands are well formed but the operation cannot be carried out.
    Invalid,
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct BigInt {
    words: [u32; MAX_WORDS],
    length: usize,
}

impl Default for BigInt {
    fn default() -> Self { Self::zero() }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        let mut words = self.significant().iter().rev();
        if let Some(top) = words.next() {
            write!(f, "{:x}", top)?;
        }
        words.try_for_each(|word| write!(f, "{:08x}", word))
    }
}

impl BigInt {
    pub const fn zero() -> Self { Self { words: [0; MAX_WORDS], length: 1 } }

    pub const fn from_u32(value: u32) -> Self {
        let mut words = [0; MAX_WORDS];
        words[0] = value;
        Self { words, length: 1 }
    }

    /// Parses a big-endian byte string. Leading zero bytes are allowed, but
    /// the string may not be longer than `MAX_BYTES`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() > MAX_BYTES {
            return Err(Error::Overflow);
        }
        let mut value = Self::zero();
        for (word, chunk) in value.words.iter_mut().zip(bytes.rchunks(4)) {
            *word = chunk.iter().fold(0u32, |acc, &byte| (acc << 8) | byte as u32);
        }
        value.length = MAX_WORDS;
        value.normalize();
        Ok(value)
    }

    /// Writes the value as big-endian bytes filling all of `output`, left
    /// padded with zeros.
    pub fn to_bytes(&self, output: &mut [u8]) -> Result<(), Error> {
        if (self.bit_length() + 7) / 8 > output.len() {
            return Err(Error::Overflow);
        }
        for (index, byte) in output.iter_mut().rev().enumerate() {
            let word = self.words.get(index / 4).copied().unwrap_or(0);
            *byte = (word >> ((index % 4) * 8)) as u8;
        }
        Ok(())
    }

    pub fn is_zero(&self) -> bool { self.length == 1 && self.words[0] == 0 }

    /// Number of significant words.
    pub fn len(&self) -> usize { self.length }

    pub fn bit_length(&self) -> usize {
        let top = self.words[self.length - 1];
        (self.length - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
    }

    pub fn is_odd(&self) -> bool { self.words[0] & 1 == 1 }

    /// Three way magnitude comparison.
    pub fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }

    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        let length = self.length.max(other.length);
        let mut result = Self::zero();
        let mut carry = 0u64;
        for i in 0..length {
            let sum = self.words[i] as u64 + other.words[i] as u64 + carry;
            result.words[i] = sum as u32;
            carry = sum >> WORD_BITS;
        }
        result.length = length;
        if carry != 0 {
            if length == MAX_WORDS {
                return Err(Error::Overflow);
            }
            result.words[length] = carry as u32;
            result.length += 1;
        }
        Ok(result)
    }

    /// Subtracts `other`, which must not be larger than `self`.
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        if *self < *other {
            return Err(Error::Overflow);
        }
        let mut result = *self;
        result.sub_assign(other);
        Ok(result)
    }

    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }
        // The product needs at least `a + b - 1` words.
        if self.length + other.length - 1 > MAX_WORDS {
            return Err(Error::Overflow);
        }

        let mut product = [0u32; 2 * MAX_WORDS];
        for (i, &a) in self.significant().iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.significant().iter().enumerate() {
                let accumulated = product[i + j] as u64 + a as u64 * b as u64 + carry;
                product[i + j] = accumulated as u32;
                carry = accumulated >> WORD_BITS;
            }
            product[i + other.length] = carry as u32;
        }

        let length = self.length + other.length;
        if length > MAX_WORDS && product[MAX_WORDS..length].iter().any(|&w| w != 0) {
            return Err(Error::Overflow);
        }
        let mut result = Self::zero();
        let kept = length.min(MAX_WORDS);
        result.words[..kept].copy_from_slice(&product[..kept]);
        result.length = kept;
        result.normalize();
        Ok(result)
    }

    /// Returns `(quotient, remainder)`.
    ///
    /// Single word divisors are divided word by word. Wider divisors go
    /// through binary long division: the divisor is aligned with the top bit
    /// of the dividend, then walked down one bit at a time, subtracting
    /// wherever it fits into the running remainder.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        match self.cmp(divisor) {
            Ordering::Less => return Ok((Self::zero(), *self)),
            Ordering::Equal => return Ok((Self::from_u32(1), Self::zero())),
            Ordering::Greater => (),
        }
        if divisor.length == 1 {
            return Ok(self.div_rem_word(divisor.words[0]));
        }

        let shift = self.bit_length() - divisor.bit_length();
        let mut shifted = divisor.shift_left(shift)?;
        let mut quotient = Self::zero();
        let mut remainder = *self;

        for bit in (0..=shift).rev() {
            if remainder >= shifted {
                remainder.sub_assign(&shifted);
                quotient.words[bit / WORD_BITS] |= 1 << (bit % WORD_BITS);
            }
            shifted.shift_right_one();
        }
        quotient.length = shift / WORD_BITS + 1;
        quotient.normalize();
        Ok((quotient, remainder))
    }

    /// Remainder of the division by `modulus`.
    pub fn modulo(&self, modulus: &Self) -> Result<Self, Error> {
        self.div_rem(modulus).map(|(_, remainder)| remainder)
    }

    pub fn shift_left(&self, bits: usize) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(*self);
        }
        if bits > MAX_WORDS * WORD_BITS - self.bit_length() {
            return Err(Error::Overflow);
        }
        let (word_shift, bit_shift) = (bits / WORD_BITS, bits % WORD_BITS);
        let mut result = Self::zero();
        for i in (0..self.length).rev() {
            let word = self.words[i];
            if bit_shift == 0 {
                result.words[i + word_shift] = word;
            } else {
                result.words[i + word_shift] |= word << bit_shift;
                if let Some(upper) = result.words.get_mut(i + word_shift + 1) {
                    *upper |= word >> (WORD_BITS - bit_shift);
                }
            }
        }
        result.length = (self.length + word_shift + 1).min(MAX_WORDS);
        result.normalize();
        Ok(result)
    }

    /// Shifts towards the least significant bit. Shifting out every bit
    /// leaves zero.
    pub fn shift_right(&self, bits: usize) -> Self {
        if bits >= self.bit_length() {
            return Self::zero();
        }
        let (word_shift, bit_shift) = (bits / WORD_BITS, bits % WORD_BITS);
        let mut result = Self::zero();
        for i in word_shift..self.length {
            let mut word = self.words[i] >> bit_shift;
            if bit_shift != 0 && i + 1 < self.length {
                word |= self.words[i + 1] << (WORD_BITS - bit_shift);
            }
            result.words[i - word_shift] = word;
        }
        result.length = self.length - word_shift;
        result.normalize();
        result
    }

    /// `self ^ exponent mod modulus`, by right to left square and multiply.
    ///
    /// The modulus may use at most half the capacity, so that the product
    /// of two reduced values always fits. The loop is bounded by the bit
    /// capacity of the exponent's significant words.
    pub fn mod_exp(&self, exponent: &Self, modulus: &Self) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if modulus.length * 2 > MAX_WORDS {
            return Err(Error::Overflow);
        }

        let mut result = Self::from_u32(1).modulo(modulus)?;
        let mut base = self.modulo(modulus)?;
        let mut exponent = *exponent;
        let max_iterations = exponent.length * WORD_BITS;

        for _ in 0..max_iterations {
            if exponent.is_zero() {
                break;
            }
            if exponent.is_odd() {
                result = result.mul(&base)?.modulo(modulus)?;
            }
            exponent.shift_right_one();
            if !exponent.is_zero() {
                base = base.mul(&base)?.modulo(modulus)?;
            }
        }

        if exponent.is_zero() {
            Ok(result)
        } else {
            Err(Error::Invalid)
        }
    }

    fn significant(&self) -> &[u32] { &self.words[..self.length] }

    fn normalize(&mut self) {
        while self.length > 1 && self.words[self.length - 1] == 0 {
            self.length -= 1;
        }
    }

    /// In place subtraction. Callers guarantee `other <= self`.
    fn sub_assign(&mut self, other: &Self) {
        let mut borrow = 0i64;
        for i in 0..self.length {
            let difference = self.words[i] as i64 - other.words[i] as i64 - borrow;
            if difference < 0 {
                self.words[i] = (difference + (1i64 << WORD_BITS)) as u32;
                borrow = 1;
            } else {
                self.words[i] = difference as u32;
                borrow = 0;
            }
        }
        self.normalize();
    }

    fn shift_right_one(&mut self) {
        for i in 0..self.length {
            let carry = self.words.get(i + 1).map_or(0, |&w| w << (WORD_BITS - 1));
            self.words[i] = (self.words[i] >> 1) | carry;
        }
        self.normalize();
    }

    fn div_rem_word(&self, divisor: u32) -> (Self, Self) {
        let mut quotient = Self::zero();
        let mut remainder = 0u64;
        for i in (0..self.length).rev() {
            let current = (remainder << WORD_BITS) | self.words[i] as u64;
            quotient.words[i] = (current / divisor as u64) as u32;
            remainder = current % divisor as u64;
        }
        quotient.length = self.length;
        quotient.normalize();
        (quotient, Self::from_u32(remainder as u32))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length.cmp(&other.length).then_with(|| {
            self.significant().iter().rev().cmp(other.significant().iter().rev())
        })
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
