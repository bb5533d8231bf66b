use num_enum::{FromPrimitive, IntoPrimitive};

/// Numbering Plan Indicator (NPI) for an SME address (Section 5.2.6).
#[derive(FromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericPlanIndicator {
    Unknown = 0b0000_0000,
    Isdn = 0b0000_0001,
    Data = 0b0000_0011,
    Telex = 0b0000_0100,
    LandMobile = 0b0000_0110,
    National = 0b0000_1000,
    Private = 0b0000_1001,
    Ermes = 0b0000_1010,
    Internet = 0b0000_1110,
    WapClientId = 0b0001_0010,
    #[num_enum(catch_all)]
    Reserved(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_values() {
        assert_eq!(NumericPlanIndicator::from(1u8), NumericPlanIndicator::Isdn);
        assert_eq!(NumericPlanIndicator::from(18u8), NumericPlanIndicator::WapClientId);
        assert_eq!(u8::from(NumericPlanIndicator::Internet), 14);
        assert_eq!(NumericPlanIndicator::from(2u8), NumericPlanIndicator::Reserved(2));
    }
}
