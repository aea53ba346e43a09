
mod authorize_test;
mod gate_code_test;
mod otp_test;
mod session_test;
