//! View Constants
//!
//! Centralized defaults shared by components, the controller and the reset form.

/// Name of the root component of every page
pub const ROOT_ELEMENT_NAME: &str = "window";

/// Separator between segments of an element path
pub const PATH_SEPARATOR: char = '.';

/// Default modal dialog dimensions for link buttons
pub const DEFAULT_MODAL_WIDTH: u32 = 1000;
pub const DEFAULT_MODAL_HEIGHT: u32 = 560;

/// Descriptor type names of the built-in components
pub const CONTAINER_TYPE: &str = "container";
pub const LABEL_TYPE: &str = "label";
pub const LINK_BUTTON_TYPE: &str = "linkButton";

/// Password reset pages
pub const LOGIN_PAGE: &str = "login.html";
pub const PASSWORD_RESET_PAGE: &str = "passwordReset.html";
pub const PASSWORD_RESET_FLAG: &str = "passwordReseted";

/// Form field carrying the username in the reset submission
pub const PASSWORD_RESET_LOGIN_FIELD: &str = "login";

/// Key code submitting the reset form
pub const ENTER_KEY_CODE: u32 = 13;

/// Remote script fetch timeout
pub const SCRIPT_TIMEOUT_SECS: u64 = 30;
