//! Validators built from primitives and cross-field logic
//!
//! Composites spread one logical input across child keys (see
//! [`key`](crate::key)) and decide, through
//! [`Accumulator::continue_unless`](crate::Accumulator::continue_unless),
//! whether earlier failures stop them. The scope differs by validator:
//!
//! | Validator | Gate |
//! |---|---|
//! | full date, full date-time, date range, date in semester | global |
//! | e-mail (after format), session code (after length) | global |
//! | selection, rating, binary option | field |
//! | username (after length), semester tag (after length) | field |

mod account;
mod codes;
mod date;
mod selection;

pub use account::{validate_email, validate_shell, validate_username, EmailOptions};
pub use codes::{
    validate_program_number, validate_program_number_range, validate_semester_code,
    validate_semester_tag, validate_session_code, CODE_YEAR_DOMAIN, PROGRAM_NUMBER_DOMAIN,
    SEMESTER_TAGS,
};
pub use date::{
    validate_date_in_semester, validate_date_range, validate_full_date, validate_full_date_in,
    validate_full_date_time, DateInput,
};
pub use selection::{validate_binary_option, validate_rating, validate_selection, SelectBy};
