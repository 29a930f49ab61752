//! Animations spread over several strands

use embassy_time::Instant;

use super::{Animation, Chase, Comet};
use crate::color::Rgb;

/// One animation instance per strand, stepped together
#[derive(Debug, Clone)]
pub struct StrandGroup<A, const STRANDS: usize> {
    members: [A; STRANDS],
}

impl<A: Animation, const STRANDS: usize> StrandGroup<A, STRANDS> {
    pub const fn new(members: [A; STRANDS]) -> Self {
        Self { members }
    }

    /// Build one member per strand from its index
    pub fn from_fn(build: impl FnMut(usize) -> A) -> Self {
        Self {
            members: core::array::from_fn(build),
        }
    }

    pub fn members(&self) -> &[A; STRANDS] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [A; STRANDS] {
        &mut self.members
    }

    /// Apply the same color to every member
    pub fn set_color(&mut self, color: Rgb) {
        for member in &mut self.members {
            member.set_color(color);
        }
    }

    /// Step every member on its own strand.
    ///
    /// Returns `true` if any member wrote pixels.
    pub fn step<const LEN: usize>(
        &mut self,
        now: Instant,
        strands: &mut [[Rgb; LEN]; STRANDS],
    ) -> bool {
        let mut changed = false;
        for (member, strand) in self.members.iter_mut().zip(strands.iter_mut()) {
            changed |= member.step(now, strand);
        }
        changed
    }

    pub fn reset(&mut self) {
        for member in &mut self.members {
            member.reset();
        }
    }
}

/// Chase with a comet running over it on the same strand.
///
/// The chase paints the whole strand first, the comet is drawn on top.
#[derive(Debug, Clone)]
pub struct CometPair {
    pub chase: Chase,
    pub comet: Comet,
}

impl CometPair {
    pub const fn new(chase: Chase, comet: Comet) -> Self {
        Self { chase, comet }
    }

    /// Color the chase and the comet independently
    pub fn set_colors(&mut self, chase: Rgb, comet: Rgb) {
        self.chase.set_color(chase);
        self.comet.set_color(comet);
    }
}

impl Animation for CometPair {
    fn set_color(&mut self, color: Rgb) {
        self.set_colors(color, color);
    }

    fn step(&mut self, now: Instant, pixels: &mut [Rgb]) -> bool {
        let chased = self.chase.step(now, pixels);
        let comet = self.comet.step(now, pixels);
        chased || comet
    }

    fn reset(&mut self) {
        self.chase.reset();
        self.comet.reset();
    }
}
