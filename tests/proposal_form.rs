//! End-to-end validation of observatory forms
//!
//! Each test threads one accumulator through the validators a real form
//! would call, the way a request handler does.

use meridian::composite::{
    validate_binary_option, validate_date_in_semester, validate_date_range, validate_email,
    validate_full_date, validate_program_number, validate_rating, validate_selection,
    validate_semester_code, validate_session_code, validate_shell, validate_username, DateInput,
    EmailOptions, SelectBy,
};
use meridian::prelude::*;
use meridian::primitive::{
    current_year, validate_day, validate_hour, validate_integer_range, validate_minute,
    validate_month, validate_required, validate_second, validate_string_length,
    validate_uploaded_file, validate_year, Bounds, YEARS_AHEAD,
};
use meridian::rules::Rules;
use meridian::{assert_field_error, assert_field_value, assert_no_errors, FieldValues, Upload};

fn instruments() -> Vec<(Value, Value)> {
    vec![
        (Value::from("hires"), Value::from("HIRES")),
        (Value::from("kpf"), Value::from("KPF")),
        (Value::from("nirspec"), Value::from("NIRSPEC")),
    ]
}

fn proposal(input: &[(&str, Value)]) -> Accumulator {
    let get = |key: &str| {
        input
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };
    let rules = Rules {
        upload_types: vec!["application/pdf".into()],
        ..Rules::default()
    };

    let form = Accumulator::new();
    let form = validate_required(form, &get("title"), "title", true);
    let form = validate_string_length(form, &get("title"), "title", 80);
    let form = validate_email(form, &get("pi_email"), "pi_email", EmailOptions::default());
    let form = validate_selection(
        form,
        &get("instruments"),
        "instruments",
        &instruments(),
        SelectBy::Keys,
    );
    let form = validate_integer_range(form, &get("nights"), "nights", 1, 14);
    let form = validate_binary_option(form, &get("remote"), "remote");
    let form = validate_uploaded_file(form, &get("pdf"), "pdf", &rules.upload_types);
    let form = validate_date_range(
        form,
        &DateInput::new(get("start_year"), get("start_month"), get("start_day")),
        &DateInput::new(get("end_year"), get("end_month"), get("end_day")),
        "run",
    );
    validate_date_in_semester(
        form,
        &DateInput::new(get("start_year"), get("start_month"), get("start_day")),
        &get("semester"),
        "window",
        &ObservatoryCalendar,
    )
    .merge(validate_shell(Accumulator::new(), &get("shell"), "shell", &rules.shells))
}

fn good_input() -> Input {
    vec![
        ("title", Value::from("Exoplanet radial velocities")),
        ("pi_email", Value::from("pi@obs.example.org")),
        ("instruments", Value::from(vec!["hires", "kpf"])),
        ("nights", Value::from("3")),
        ("remote", Value::from("1")),
        ("pdf", Value::from(Upload::new(0, "application/pdf").with_name("p.pdf"))),
        ("start_year", Value::from("2024")),
        ("start_month", Value::from("8")),
        ("start_day", Value::from("12")),
        ("end_year", Value::from("2024")),
        ("end_month", Value::from("8")),
        ("end_day", Value::from("14")),
        ("semester", Value::from("2024B")),
        ("shell", Value::from("/bin/tcsh")),
    ]
}

type Input = Vec<(&'static str, Value)>;

fn with(mut input: Input, key: &str, value: Value) -> Input {
    for entry in input.iter_mut().filter(|(k, _)| *k == key) {
        entry.1 = value.clone();
    }
    input
}

#[test]
fn clean_proposal_yields_normalized_values() {
    let form = proposal(&good_input());
    assert_no_errors!(form);

    let values: FieldValues = form.into_result().expect("clean form");
    assert_eq!(values["nights"], Value::Int(3));
    assert_eq!(values["remote"], Value::Int(1));
    assert_eq!(values["instruments"], Value::from(vec!["hires", "kpf"]));
    assert_eq!(values["window_semester"], Value::from("2024B"));
    assert!(values.contains_key("run_start_timestamp"));
    assert!(values.contains_key("run_end_components"));
}

#[test]
fn every_problem_is_reported_at_once() {
    let input = with(good_input(), "title", Value::from(""));
    let input = with(input, "nights", Value::from("20"));
    let input = with(input, "instruments", Value::from(vec!["hires", "lris"]));
    let input = with(input, "shell", Value::from("/bin/fish"));
    let input = with(input, "pdf", Value::from(Upload::new(0, "text/plain")));
    let form = proposal(&input);

    assert_field_error!(form, "title", FieldError::Required);
    assert_field_error!(form, "nights", FieldError::OutOfRange { min: 1, max: 14 });
    assert_field_error!(
        form,
        "instruments",
        FieldError::InvalidSelection { value: "lris".into() }
    );
    assert_field_error!(form, "shell");
    assert_field_error!(
        form,
        "pdf",
        FieldError::MimeNotAllowed { mime: "text/plain".into() }
    );
    assert!(!form.has_field_errors("pi_email"));
}

#[test]
fn unrelated_error_suppresses_date_derivation() {
    let input = with(good_input(), "nights", Value::from("zero"));
    let form = proposal(&input);

    assert_field_error!(form, "nights", FieldError::NotInteger);
    assert_field_value!(form, "run_start_day", 12);
    assert_eq!(form.field_value("run_start"), None);
    assert!(!form.has_field_errors("window"));
}

#[test]
fn date_outside_semester_is_cross_field_error() {
    let input = with(good_input(), "semester", Value::from("2024A"));
    let form = proposal(&input);

    let errors = form.field_errors("window");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::CrossField);
}

#[test]
fn year_accepts_whole_default_range() {
    let last = current_year() + YEARS_AHEAD;
    let form = [1900, 1999, last].iter().fold(Accumulator::new(), |form, year| {
        validate_year(form, &Value::from(*year), &format!("y{}", year), Bounds::default())
    });
    assert_no_errors!(form);
    assert_field_value!(form, "y1900", 1900);
}

#[test]
fn year_floor_cannot_be_lowered() {
    let floor = Bounds::at_least(500);
    let lowered = validate_year(Accumulator::new(), &Value::from(1899), "y", floor);
    let default = validate_year(Accumulator::new(), &Value::from(1899), "y", Bounds::default());
    assert_eq!(lowered.field_errors("y"), default.field_errors("y"));
}

#[test]
fn component_bounds_are_clamped_into_domain() {
    let wide = Bounds::new(-100, 100);
    let form = Accumulator::new();
    let form = validate_month(form, &Value::from(13), "month", wide);
    let form = validate_day(form, &Value::from(32), "day", wide);
    let form = validate_hour(form, &Value::from(24), "hour", wide);
    let form = validate_minute(form, &Value::from(60), "minute", wide);
    let form = validate_second(form, &Value::from(-1), "second", wide);

    assert_field_error!(form, "month", FieldError::OutOfRange { min: 1, max: 12 });
    assert_field_error!(form, "day", FieldError::OutOfRange { min: 1, max: 31 });
    assert_field_error!(form, "hour", FieldError::OutOfRange { min: 0, max: 23 });
    assert_field_error!(form, "minute", FieldError::OutOfRange { min: 0, max: 59 });
    assert_field_error!(form, "second", FieldError::OutOfRange { min: 0, max: 59 });
}

#[test]
fn leap_day_only_in_leap_years() {
    let y = |n: i32| Value::from(n);
    let form = validate_full_date(Accumulator::new(), &y(2024), &y(2), &y(29), "leap");
    assert_no_errors!(form);
    assert!(form.field_value("leap_timestamp").is_some());

    let form = validate_full_date(Accumulator::new(), &y(2024), &y(2), &y(30), "bad");
    assert_field_error!(
        form,
        "bad",
        FieldError::InvalidDate { year: 2024, month: 2, day: 30 }
    );
    assert_eq!(form.field_value("bad_timestamp"), None);
}

#[test]
fn range_ordering_is_non_strict() {
    let day = DateInput::new(2024, 9, 1);
    let same = validate_date_range(Accumulator::new(), &day, &day, "run");
    assert_no_errors!(same);

    let reversed = validate_date_range(
        Accumulator::new(),
        &DateInput::new(2024, 9, 2),
        &day,
        "run",
    );
    assert_eq!(reversed.error_count(), 1);
    assert_field_error!(reversed, "run", FieldError::EndBeforeStart);
}

#[test]
fn semester_codes() {
    let form = validate_semester_code(Accumulator::new(), &Value::from("2024A"), "a");
    let form = validate_semester_code(form, &Value::from("2024C"), "c");
    let form = validate_semester_code(form, &Value::from("12345"), "digits");

    assert_field_value!(form, "a", "2024A");
    assert_field_error!(form, "c_tag");
    assert!(!form.has_field_errors("digits_year"));
    assert_field_error!(
        form,
        "digits_tag",
        FieldError::InvalidSemesterTag { value: "5".into() }
    );
}

#[test]
fn program_numbers() {
    let form = validate_program_number(Accumulator::new(), &Value::from("2024A007"), "ok");
    let form = validate_program_number(form, &Value::from("2024A07"), "short");

    assert_field_value!(form, "ok", "2024A007");
    assert_field_error!(form, "short", FieldError::WrongLength { expected: 8 });
    assert_eq!(form.field_value("short_year"), None);
    assert!(!form.has_field_errors("short_year"));
}

#[test]
fn session_codes() {
    let codes = Rules::default().engineering_codes;
    let form =
        validate_session_code(Accumulator::new(), &Value::from("tisanpwd"), "eng", &codes);
    let form = validate_session_code(form, &Value::from("AB12CD34EF"), "sci", &codes);
    assert_no_errors!(form);

    let form = validate_session_code(form, &Value::from("AB12-D34EF"), "bad", &codes);
    assert_field_error!(form, "bad", FieldError::NotAlphanumeric);
}

#[test]
fn ratings() {
    let form = validate_rating(Accumulator::new(), &Value::from(4), "a", false);
    let form = validate_rating(form, &Value::from(0), "na", true);
    assert_no_errors!(form);

    let form = validate_rating(form, &Value::from(0), "b", false);
    assert_field_error!(form, "b");
}

#[test]
fn uploads() {
    let failed = Value::from(Upload::new(1, "application/pdf"));
    let none: [&str; 0] = [];
    let form = validate_uploaded_file(Accumulator::new(), &failed, "open", &none);
    let form = validate_uploaded_file(form, &failed, "strict", &["application/pdf"]);
    assert_field_error!(form, "open");
    assert_field_error!(form, "strict");

    let image = Value::from(Upload::new(0, "image/jpeg"));
    let form = validate_uploaded_file(form, &image, "chart", &["application/pdf"]);
    assert_field_error!(
        form,
        "chart",
        FieldError::MimeNotAllowed { mime: "image/jpeg".into() }
    );
}

#[test]
fn guest_account_with_custom_rules() {
    let rules = Rules {
        shells: vec!["/bin/bash".into()],
        username_max_len: 8,
        ..Rules::default()
    };
    let form = validate_username(
        Accumulator::new(),
        &Value::from("visitor9"),
        "login",
        Some(rules.username_max_len),
    );
    let form = validate_shell(form, &Value::from("/bin/bash"), "shell", &rules.shells);
    let form = validate_shell(form, &Value::from("/bin/zsh"), "other", &rules.shells);

    assert_field_value!(form, "login", "visitor9");
    assert!(!form.has_field_errors("shell"));
    assert_field_error!(form, "other");
}

#[test]
fn independent_sections_merge() {
    let applicant = validate_email(
        Accumulator::new(),
        &Value::from("not-an-address"),
        "email",
        EmailOptions::default(),
    );
    let schedule = validate_integer_range(Accumulator::new(), &Value::from(3), "nights", 1, 5);

    let form = applicant.merge(schedule);
    assert_field_error!(form, "email", FieldError::InvalidEmail);
    assert_field_value!(form, "nights", 3);
    assert!(form.into_validation().is_failure());
}
