use super::controls::ControlId;

pub const INPUT_FIND: ControlId = ControlId(1001);
pub const INPUT_REPLACE: ControlId = ControlId(1002);
pub const INPUT_INCLUDE: ControlId = ControlId(1003);
pub const INPUT_EXCLUDE: ControlId = ControlId(1004);
pub const DROPDOWN_PARSER: ControlId = ControlId(1005);
pub const CHECKBOX_PRETTIER: ControlId = ControlId(1006);
pub const BUTTON_DETAILS: ControlId = ControlId(1101);
pub const BUTTON_REPLACE_ALL: ControlId = ControlId(1102);
pub const PROGRESS_RUN: ControlId = ControlId(2001);
pub const LABEL_MATCHES: ControlId = ControlId(3001);
pub const LABEL_ERRORS: ControlId = ControlId(3002);
