//! Safety and ethics gate: content checks, role boundaries, response
//! quality, and the fixed crisis reply.

pub mod crisis;
pub mod ethics;
pub mod gate;
pub mod patterns;
pub mod validator;

pub use crisis::crisis_response;
pub use ethics::{check_ethics, EthicalVerdict};
pub use gate::{check_safety, SafetyContext, SafetyVerdict, Severity};
pub use validator::{validate_response, ResponseValidation};
