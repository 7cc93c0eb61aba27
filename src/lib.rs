mod flagpole;

// re-export public objects to top level
pub use flagpole::country_code::CountryCode;
pub use flagpole::flagpole_error::FlagpoleError;
pub use flagpole::flagpole_user::{FlagpoleUser, UserBuilder};
