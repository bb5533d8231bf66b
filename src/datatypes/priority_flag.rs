// ABOUTME: Defines SMPP v3.4 priority_flag field values per specification Section 5.2.14
// ABOUTME: Reserved levels are preserved so parsing stays lossless

use num_enum::{FromPrimitive, IntoPrimitive};

/// SMPP v3.4 Priority Flag Field (Section 5.2.14)
///
/// The priority_flag parameter lets the originating SME assign a priority
/// level to the short message.
///
/// ## Network Technology Mapping
/// - **GSM**: 0 is non-priority, 1-3 are priority
/// - **ANSI-136**: 0 bulk, 1 normal, 2 urgent, 3 very urgent
/// - **IS-95**: 0 normal, 1 interactive, 2 urgent, 3 emergency
///
/// Levels 4-255 are reserved and are kept as `Reserved` rather than
/// rejected, since the field is informational for an inbound decoder.
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PriorityFlag {
    /// Level 0 - Lowest priority (default)
    Level0 = 0,
    /// Level 1
    Level1 = 1,
    /// Level 2
    Level2 = 2,
    /// Level 3 - Highest priority
    Level3 = 3,
    #[num_enum(catch_all)]
    Reserved(u8),
}

// num_enum treats `#[default]` as the FromPrimitive fallback, which cannot
// coexist with `catch_all`
impl Default for PriorityFlag {
    fn default() -> Self {
        PriorityFlag::Level0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_and_reserved() {
        assert_eq!(PriorityFlag::from(0u8), PriorityFlag::Level0);
        assert_eq!(PriorityFlag::from(3u8), PriorityFlag::Level3);
        assert_eq!(PriorityFlag::from(9u8), PriorityFlag::Reserved(9));
        assert_eq!(u8::from(PriorityFlag::Level2), 2);
    }

    #[test]
    fn default_is_level0() {
        assert_eq!(PriorityFlag::default(), PriorityFlag::Level0);
        assert_eq!(PriorityFlag::from(0xFFu8), PriorityFlag::Reserved(0xFF));
    }
}
