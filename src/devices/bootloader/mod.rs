//! Boot state machine.
//!
//! Drives one boot cycle from reset to either a verified image to jump to,
//! or a reported error to halt on. Construction and the jump itself are
//! board specific and live in the `ports` module; everything here runs
//! against the `hal` traits only.
use super::{
    comm,
    image::{Bank, Image},
    metadata::{Flags, Metadata, MetadataStore},
    protocol::{self, Decision},
};
use crate::{
    crypto::rsa::PublicKey,
    error::Error,
    hal::{
        comm::Transport,
        flash::{Address, Flash},
        time::{Milliseconds, Now},
    },
    log::{error, info, warn},
    uprintln,
};
use nb::block;

mod receive;
mod swap;
mod verify;

/// Whether images must carry a valid signature before they are booted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecurityMode {
    /// Signatures are received and stored but never checked.
    None,
    /// RSA-2048 PKCS#1 v1.5 over the SHA-256 of the firmware.
    Rsa2048,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryMap {
    pub metadata: Address,
    pub staging: Bank,
    pub active: Bank,
}

#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub memory: MemoryMap,
    pub security: SecurityMode,
    pub key: PublicKey<'static>,
    /// How long the host has to answer the update prompt.
    pub decision_timeout: Milliseconds,
    /// Longest silence tolerated during a transfer.
    pub receive_timeout: Milliseconds,
}

/// Where a received image is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Into the staging bank, to be verified and then swapped in.
    Staged,
    /// Straight over the active bank, unverified.
    Forced,
}

/// Image whose signature is about to be checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Candidate {
    Staged(Image),
    /// The image the metadata describes.
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Idle,
    LoadMetadata,
    WaitUpdateDecision,
    Receiving(Mode),
    VerifySignature(Candidate),
    Swap(Image),
    JumpToApp,
    Error(Error),
}

/// How a boot cycle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Control should be transferred to this image.
    Boot(Image),
    /// Nothing bootable; the error has been reported.
    Halt(Error),
}

pub struct Bootloader<F: Flash, T: Transport, C: Now> {
    pub(crate) flash: F,
    pub(crate) transport: T,
    pub(crate) clock: C,
    pub(crate) settings: Settings,
    pub(crate) store: MetadataStore,
    pub(crate) metadata: Option<Metadata>,
    pub(crate) state: State,
    pub(crate) last_error: Option<Error>,
    /// Cleared when the transport fails to come up, which skips the prompt.
    pub(crate) link_up: bool,
}

impl<F: Flash, T: Transport, C: Now> Bootloader<F, T, C> {
    pub fn new(flash: F, transport: T, clock: C, settings: Settings) -> Self {
        Self {
            flash,
            transport,
            clock,
            store: MetadataStore::new(settings.memory.metadata),
            settings,
            metadata: None,
            state: State::Idle,
            last_error: None,
            link_up: false,
        }
    }

    pub fn state(&self) -> State { self.state }

    /// Most recent failure, including ones the cycle recovered from.
    pub fn last_error(&self) -> Option<Error> { self.last_error }

    /// Metadata as last loaded or committed.
    pub fn metadata(&self) -> Option<Metadata> { self.metadata }

    pub fn into_parts(self) -> (F, T, C) { (self.flash, self.transport, self.clock) }

    /// Runs every step of a boot cycle until it reaches a terminal state.
    pub fn run_cycle(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Performs a single transition. Returns the outcome once a terminal
    /// state has been processed.
    pub fn step(&mut self) -> Option<Outcome> {
        match self.state {
            State::Idle => {
                self.state = self.bring_up_link();
                None
            }
            State::LoadMetadata => {
                self.state = self.load_metadata();
                None
            }
            State::WaitUpdateDecision => {
                self.state = self.wait_update_decision();
                None
            }
            State::Receiving(mode) => {
                self.state = self.receiving(mode);
                None
            }
            State::VerifySignature(candidate) => {
                self.state = self.verify_signature(candidate);
                None
            }
            State::Swap(image) => {
                self.state = match self.swap(image) {
                    Ok(()) => State::JumpToApp,
                    Err(e) => State::Error(e),
                };
                None
            }
            State::JumpToApp => match self.bootable_image() {
                Ok(image) => {
                    info!("Booting image at {:?}", image.location);
                    let _ = uprintln!(self.transport, "{}", protocol::JUMP_MESSAGE);
                    Some(Outcome::Boot(image))
                }
                Err(e) => {
                    self.state = State::Error(e);
                    None
                }
            },
            State::Error(e) => {
                error!("Boot cycle halted: {:?}", e);
                self.last_error = Some(e);
                e.report(&mut self.transport);
                Some(Outcome::Halt(e))
            }
        }
    }

    fn bring_up_link(&mut self) -> State {
        let link = self.transport.init().and_then(|_| self.transport.send(&[protocol::BOOT_FINISHED]));
        match link {
            Ok(()) => {
                info!("Transport initialized");
                self.link_up = true;
            }
            Err(e) => {
                let e = Error::from(e);
                warn!("Transport unavailable, update prompt skipped: {:?}", e);
                self.last_error = Some(e);
                self.link_up = false;
            }
        }
        State::LoadMetadata
    }

    fn load_metadata(&mut self) -> State {
        self.metadata = self.store.load(&mut self.flash);
        match self.metadata {
            Some(metadata) => info!("Current image at {:?}", metadata.firmware_address),
            None => warn!("No valid metadata record"),
        }
        if self.link_up {
            State::WaitUpdateDecision
        } else {
            State::JumpToApp
        }
    }

    fn wait_update_decision(&mut self) -> State {
        let _ = uprintln!(self.transport, "{}", protocol::BANNER);
        let byte = match comm::recv_byte_timeout(
            &mut self.transport,
            &self.clock,
            self.settings.decision_timeout,
        ) {
            Ok(byte) => byte,
            Err(Error::Timeout) => {
                info!("No update requested");
                return State::JumpToApp;
            }
            Err(e) => {
                self.fail_softly(e);
                return State::VerifySignature(Candidate::Active);
            }
        };

        let decision = match Decision::parse(byte) {
            Some(decision) => decision,
            None => {
                self.fail_softly(Error::InvalidCommand(byte));
                return State::VerifySignature(Candidate::Active);
            }
        };
        if let Err(e) = self.transport.send(&[protocol::UPDATE_ACK]) {
            self.fail_softly(Error::from(e));
            return State::VerifySignature(Candidate::Active);
        }

        match decision {
            Decision::Update => State::Receiving(Mode::Staged),
            Decision::ForceUpdate => State::Receiving(Mode::Forced),
            Decision::Skip => State::VerifySignature(Candidate::Active),
        }
    }

    fn receiving(&mut self, mode: Mode) -> State {
        let image = match self.receive(mode) {
            Ok(image) => image,
            Err(e) => {
                let _ = uprintln!(self.transport, "{}", protocol::FAILED_MESSAGE);
                self.fail_softly(e);
                return State::VerifySignature(Candidate::Active);
            }
        };
        let _ = uprintln!(self.transport, "{}", protocol::RECEIVED_MESSAGE);

        match mode {
            Mode::Staged => State::VerifySignature(Candidate::Staged(image)),
            Mode::Forced => {
                warn!("Forced update: image installed WITHOUT signature verification");
                match self.commit(&image, Flags::VALID) {
                    Ok(()) => State::JumpToApp,
                    Err(e) => State::Error(e),
                }
            }
        }
    }

    fn verify_signature(&mut self, candidate: Candidate) -> State {
        let image = match candidate {
            Candidate::Staged(image) => image,
            Candidate::Active => match self.metadata {
                Some(metadata) => metadata.image(),
                None => return State::Error(Error::NoValidImage),
            },
        };

        let verification = if self.settings.security == SecurityMode::None {
            warn!("Security mode is None, signature not checked");
            Ok(())
        } else {
            self.verify(&image)
        };

        match (candidate, verification) {
            (Candidate::Staged(image), Ok(())) => State::Swap(image),
            (Candidate::Staged(_), Err(e)) => {
                self.fail_softly(e);
                warn!("Falling back to the installed image");
                State::VerifySignature(Candidate::Active)
            }
            (Candidate::Active, Ok(())) => State::JumpToApp,
            (Candidate::Active, Err(e)) => State::Error(e),
        }
    }

    /// The image the metadata allows to boot.
    fn bootable_image(&self) -> Result<Image, Error> {
        let active = self.settings.memory.active;
        self.metadata
            .filter(|m| m.is_valid())
            .map(|m| m.image())
            .filter(|image| image.location == active.location && image.size > 0)
            .filter(|image| image.end() <= active.end())
            .ok_or(Error::NoValidImage)
    }

    /// Records and reports a failure the cycle can recover from.
    fn fail_softly(&mut self, e: Error) {
        warn!("Recoverable failure: {:?}", e);
        e.report(&mut self.transport);
        self.last_error = Some(e);
    }

    /// Replaces the metadata so it describes `image`.
    fn commit(&mut self, image: &Image, flags: Flags) -> Result<(), Error> {
        let metadata = Metadata::describing(image, flags);
        self.store.commit(&mut self.flash, &metadata)?;
        self.metadata = Some(metadata);
        Ok(())
    }

    fn invalidate_metadata(&mut self) -> Result<(), Error> {
        self.metadata = None;
        self.store.invalidate(&mut self.flash)
    }
}

/// Erases every sector overlapping `[start, start + length)`.
pub(crate) fn erase_range<F: Flash>(flash: &mut F, start: Address, length: usize) -> Result<(), Error> {
    let end = start + length;
    let mut address = start;
    while address < end {
        let sector = flash
            .sector_of(address)
            .ok_or(Error::ConfigurationError("Erase range outside flash"))?;
        block!(flash.erase_sector(sector.id)).map_err(|_| Error::FlashEraseFailed)?;
        address = sector.end();
    }
    Ok(())
}
