//! Per-raid unit allocation

/// Units of one type to send on each raid: `floor(count / hunt_instinct)`
///
/// The remainder stays home. No raids means nothing to send.
pub fn per_raid_count(count: u64, hunt_instinct: u32) -> u64 {
    if hunt_instinct == 0 {
        return 0;
    }
    count / hunt_instinct as u64
}
