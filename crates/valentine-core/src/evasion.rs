use crate::geometry::ZoneLayout;
use crate::responsive::ResponsiveProfile;
use glam::DVec2;

/// Push direction used when the pointer sits exactly on the control's center.
pub const FALLBACK_DIRECTION: DVec2 = DVec2::X;

/// Result of one evasion step, offsets relative to the zone's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evasion {
    /// Where the control was before the push.
    pub from: DVec2,
    /// Clamped target offset to write as `left`/`top`.
    pub offset: DVec2,
}

impl Evasion {
    #[inline]
    pub fn displacement(&self) -> DVec2 {
        self.offset - self.from
    }
}

/// `max(lo, min(hi, n))`. Unlike `f64::clamp` this never panics when the
/// zone is too small for the control (`lo > hi`); the padding wins.
#[inline]
pub fn clamp_axis(n: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(n))
}

/// Push the control away from `pointer` by the profile's speed, clamped into
/// the zone with the profile's padding on both axes.
///
/// A pointer exactly on the center has no "away"; the push then goes along
/// `FALLBACK_DIRECTION`, or against it when the control already sits at that
/// bound.
pub fn evade(pointer: DVec2, layout: &ZoneLayout, profile: &ResponsiveProfile) -> Evasion {
    let from = layout.control.offset_within(&layout.zone);
    let push = |dir: DVec2| push_clamped(from, dir, layout, profile);

    let offset = match (layout.control.center() - pointer).try_normalize() {
        Some(dir) => push(dir),
        None => {
            let forward = push(FALLBACK_DIRECTION);
            if forward == from {
                push(-FALLBACK_DIRECTION)
            } else {
                forward
            }
        }
    };

    log::debug!(
        "[evade] pointer=({:.1},{:.1}) from=({:.1},{:.1}) to=({:.1},{:.1})",
        pointer.x,
        pointer.y,
        from.x,
        from.y,
        offset.x,
        offset.y
    );
    Evasion { from, offset }
}

fn push_clamped(
    from: DVec2,
    dir: DVec2,
    layout: &ZoneLayout,
    profile: &ResponsiveProfile,
) -> DVec2 {
    let target = from + dir * profile.push_speed;
    let pad = profile.clamp_padding;
    let max = layout.zone.size - layout.control.size - DVec2::splat(pad);
    DVec2::new(
        clamp_axis(target.x, pad, max.x),
        clamp_axis(target.y, pad, max.y),
    )
}
