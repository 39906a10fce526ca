//! Widget state machine: Idle → Celebrating (terminal).
//!
//! [`Widget`] owns every piece of mutable state (growth factor, negative
//! control offset, resize debounce). Each input-event type has exactly one
//! dispatch path, and each path returns the [`Effect`]s the host must apply
//! to the page, in order.

use crate::celebration::CelebrationSchedule;
use crate::debounce::{Debouncer, Ticket};
use crate::evasion;
use crate::geometry::ZoneLayout;
use crate::growth::Growth;
use crate::input::{self, PointerSample, PointerSource};
use crate::responsive::{self, Viewport};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Celebrating,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidgetEvent {
    /// Pointer-move, touch-move, or pointer-down on the negative control.
    Pointer(PointerSample),
    /// Affirmative control clicked.
    Activate,
    /// A resize/orientation debounce has settled.
    ResizeSettled,
}

/// Page mutation requested by a dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Absolute `left`/`top` for the negative control, centering transform removed.
    PlaceNegative(DVec2),
    /// Back to flow layout: offsets unset, baseline transform restored.
    RestoreNegative,
    /// New scale for the affirmative control.
    ScaleAffirmative(f64),
    /// `preventDefault` on the triggering event.
    SuppressDefault,
    HideZone,
    HideHint,
    ShowResult,
    /// Resize the particle surface to the full viewport.
    SizeSurface,
    StartCelebration(CelebrationSchedule),
}

pub type Effects = SmallVec<[Effect; 8]>;

/// Where the negative control currently sits. `None` means default flow layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NegativeControl {
    offset: Option<DVec2>,
}

impl NegativeControl {
    #[inline]
    pub fn offset(&self) -> Option<DVec2> {
        self.offset
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.offset.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct Widget {
    phase: Phase,
    growth: Growth,
    negative: NegativeControl,
    resize: Debouncer,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            growth: Growth::default(),
            negative: NegativeControl::default(),
            resize: Debouncer::default(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.growth.scale()
    }

    #[inline]
    pub fn negative(&self) -> &NegativeControl {
        &self.negative
    }

    /// Start (or restart) the resize quiet period.
    pub fn arm_resize(&mut self) -> Ticket {
        self.resize.arm()
    }

    #[inline]
    pub fn resize_quiet_ms(&self) -> f64 {
        self.resize.quiet_ms()
    }

    /// True only for the latest ticket, once.
    pub fn settle_resize(&mut self, ticket: Ticket) -> bool {
        self.resize.settle(ticket)
    }

    /// `layout` and `viewport` are measured by the host right before the call.
    pub fn dispatch(&mut self, event: WidgetEvent, layout: &ZoneLayout, viewport: &Viewport) -> Effects {
        if self.phase == Phase::Celebrating {
            return Effects::new();
        }
        match event {
            WidgetEvent::Pointer(sample) => self.on_pointer(sample, layout, viewport),
            WidgetEvent::Activate => self.on_activate(),
            WidgetEvent::ResizeSettled => self.on_resize_settled(layout),
        }
    }

    fn on_pointer(&mut self, sample: PointerSample, layout: &ZoneLayout, viewport: &Viewport) -> Effects {
        let mut fx = Effects::new();
        let profile = responsive::profile(viewport);
        if sample.source == PointerSource::PressOnControl {
            fx.push(Effect::SuppressDefault);
        }
        if !input::should_evade(&sample, layout, &profile) {
            return fx;
        }

        let ev = evasion::evade(sample.point, layout, &profile);
        self.negative.offset = Some(ev.offset);
        fx.push(Effect::PlaceNegative(ev.offset));

        let scale = self.growth.grow(&profile);
        fx.push(Effect::ScaleAffirmative(scale));

        if sample.source == PointerSource::Touch {
            fx.push(Effect::SuppressDefault);
        }
        fx
    }

    fn on_activate(&mut self) -> Effects {
        self.phase = Phase::Celebrating;
        log::info!("[widget] affirmative activated at scale {:.2}", self.growth.scale());
        smallvec::smallvec![
            Effect::HideZone,
            Effect::HideHint,
            Effect::ShowResult,
            Effect::SizeSurface,
            Effect::StartCelebration(CelebrationSchedule::default()),
        ]
    }

    fn on_resize_settled(&mut self, layout: &ZoneLayout) -> Effects {
        let mut fx = Effects::new();
        self.growth.reset();
        fx.push(Effect::ScaleAffirmative(self.growth.scale()));
        if layout.zone.size.x > 0.0 {
            self.negative.offset = None;
            fx.push(Effect::RestoreNegative);
        }
        log::debug!("[widget] resize settled; growth reset");
        fx
    }
}
