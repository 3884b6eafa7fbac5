//! Tilt to fall direction

use crate::motion::Tilt;

/// tan(67.5°) scaled by 1000
const TAN_67_5: i64 = 2414;

/// tan(22.5°) scaled by 1000
const TAN_22_5: i64 = 414;

/// Unit step a grain takes under the given tilt
///
/// Tilt is split into eight 45° sectors; a diagonal step is taken between
/// 22.5° and 67.5° off an axis. Without any x component grains fall along
/// y, toward negative y if y is zero as well.
pub fn fall_direction(tilt: Tilt) -> (i32, i32) {
    let (ax, ay) = (tilt.x as i64, tilt.y as i64);
    if ax == 0 {
        return (0, if ay > 0 { 1 } else { -1 });
    }

    let (ax_abs, ay_scaled) = (ax.abs(), ay.abs() * 1000);
    let ix = if ay_scaled < TAN_67_5 * ax_abs { ax.signum() } else { 0 };
    let iy = if ay_scaled > TAN_22_5 * ax_abs { ay.signum() } else { 0 };
    (ix as i32, iy as i32)
}
