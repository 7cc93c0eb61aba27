pub mod country_code;
pub mod flagpole_error;
pub mod flagpole_user;
