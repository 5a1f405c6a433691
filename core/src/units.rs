/// Meter -> fot.
pub const FEET_PER_METER: f64 = 3.2808399;

/// Meter til fot, brøkdelen kuttes (ingen avrunding).
pub fn meters_to_feet(m: u32) -> u32 {
    (m as f64 * FEET_PER_METER) as u32
}
