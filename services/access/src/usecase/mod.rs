pub mod announcement;
pub mod emergency;
pub mod gate_code;
pub mod otp;
pub mod resident;
