mod address;
mod bind;
mod command_id;
mod command_status;
mod data_coding;
mod esm_class;
mod message_body;
mod numeric_plan_indicator;
mod priority_flag;
mod responses;
pub mod tlv;
mod type_of_number;

pub use address::Address;
pub use bind::{BindRequest, BindResponse};
pub use command_id::CommandId;
pub use command_status::CommandStatus;
pub use data_coding::{DataCoding, MessageClass};
pub use esm_class::{EsmClass, MessageMode, MessageType};
pub use message_body::MessageBody;
pub use numeric_plan_indicator::NumericPlanIndicator;
pub use priority_flag::PriorityFlag;
pub use responses::{EmptyBody, MessageResponse};
pub use tlv::{Tlv, TlvIter};
pub use type_of_number::TypeOfNumber;
