//! FTP reply codes used by the server

pub const OK: u16 = 200;
pub const SYSTEM_STATUS: u16 = 211;
pub const READY: u16 = 220;
pub const CLOSING_CONTROL_CONNECTION: u16 = 221;
pub const LOGIN_SUCCESS: u16 = 230;
pub const FILE_ACTION_OK: u16 = 250;
pub const PATHNAME_CREATED: u16 = 257;
pub const PASSWORD_REQUIRED: u16 = 331;
pub const SYNTAX_ERROR: u16 = 500;
pub const SYNTAX_ERROR_IN_ARGUMENTS: u16 = 501;
pub const NOT_IMPLEMENTED: u16 = 502;
pub const BAD_SEQUENCE: u16 = 503;
pub const NOT_IMPLEMENTED_FOR_PARAMETER: u16 = 504;
pub const NOT_LOGGED_IN: u16 = 530;
pub const FILE_UNAVAILABLE: u16 = 550;
