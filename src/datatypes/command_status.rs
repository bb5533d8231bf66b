use num_enum::TryFromPrimitive;

/// SMPP v3.4 error codes carried in the `command_status` header field
/// (Section 5.1.3).
///
/// The header keeps the raw `u32` because SMSC vendors use the reserved
/// ranges freely; use [`CommandStatus::try_from`] to classify a value.
#[derive(TryFromPrimitive)]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommandStatus {
    /// ESME_ROK
    Ok = 0x0000_0000,
    InvalidMsgLength = 0x0000_0001,
    InvalidCommandLength = 0x0000_0002,
    InvalidCommandId = 0x0000_0003,
    IncorrectBindStatus = 0x0000_0004,
    AlreadyBoundState = 0x0000_0005,
    InvalidPriorityFlag = 0x0000_0006,
    InvalidRegisteredDeliveryFlag = 0x0000_0007,
    SystemError = 0x0000_0008,
    InvalidSourceAddress = 0x0000_000A,
    InvalidDestinationAddress = 0x0000_000B,
    InvalidMessageId = 0x0000_000C,
    BindFailed = 0x0000_000D,
    InvalidPassword = 0x0000_000E,
    InvalidSystemId = 0x0000_000F,
    CancelSmFailed = 0x0000_0011,
    ReplaceSmFailed = 0x0000_0013,
    MessageQueueFull = 0x0000_0014,
    InvalidServiceType = 0x0000_0015,
    InvalidNumberOfDestinations = 0x0000_0033,
    InvalidDistributionListName = 0x0000_0034,
    InvalidDestinationFlag = 0x0000_0040,
    InvalidSubmitWithReplaceRequest = 0x0000_0042,
    InvalidEsmClassFieldData = 0x0000_0043,
    CannotSubmitToDistributionList = 0x0000_0044,
    SubmitFailed = 0x0000_0045,
    InvalidSourceAddressTon = 0x0000_0048,
    InvalidSourceAddressNpi = 0x0000_0049,
    InvalidDestinationAddressTon = 0x0000_0050,
    InvalidDestinationAddressNpi = 0x0000_0051,
    InvalidSystemTypeField = 0x0000_0053,
    InvalidReplaceIfPresentFlag = 0x0000_0054,
    InvalidNumberOfMessages = 0x0000_0055,
    /// ESME has exceeded allowed message limits
    ThrottlingError = 0x0000_0058,
    InvalidScheduledDeliveryTime = 0x0000_0061,
    InvalidExpiryTime = 0x0000_0062,
    InvalidPredefinedMessageId = 0x0000_0063,
    ReceiverTemporaryAppError = 0x0000_0064,
    ReceiverPermanentAppError = 0x0000_0065,
    ReceiverRejectMessageError = 0x0000_0066,
    QuerySmRequestFailed = 0x0000_0067,
    ErrorInOptionalPartOfPduBody = 0x0000_00C0,
    OptionalParameterNotAllowed = 0x0000_00C1,
    InvalidParameterLength = 0x0000_00C2,
    ExpectedOptionalParameterMissing = 0x0000_00C3,
    InvalidOptionalParameterValue = 0x0000_00C4,
    /// Used for data_sm_resp
    DeliveryFailed = 0x0000_00FE,
    UnknownError = 0x0000_00FF,
    // 0x00000100 - 0x000003FF reserved for SMPP extension
    // 0x00000400 - 0x000004FF reserved for SMSC vendor specific errors
}

impl CommandStatus {
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// True for the vendor-specific range 0x400-0x4FF.
    pub fn is_vendor_specific(raw: u32) -> bool {
        (0x0000_0400..=0x0000_04FF).contains(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_status() {
        assert_eq!(
            CommandStatus::try_from(0x0000_0002u32).ok(),
            Some(CommandStatus::InvalidCommandLength)
        );
        assert_eq!(CommandStatus::ThrottlingError.as_u32(), 0x58);
    }

    #[test]
    fn vendor_status_is_not_an_enum_value() {
        assert!(CommandStatus::try_from(0x0000_0401u32).is_err());
        assert!(CommandStatus::is_vendor_specific(0x0000_0401));
        assert!(!CommandStatus::is_vendor_specific(0x0000_0008));
    }
}
