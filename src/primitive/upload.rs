use crate::value::upload_failure_reason;
use crate::{Accumulator, FieldError, Upload, Validation, Value};

/// Require a successful upload of an accepted MIME type.
///
/// An empty `allowed_mime` list accepts any type. The status check runs
/// first, so a failed transfer is reported as such whatever its type.
///
/// ```
/// use meridian::{Accumulator, Upload, Value};
/// use meridian::primitive::validate_uploaded_file;
///
/// let finder_chart = Value::from(Upload::new(0, "image/png"));
/// let allowed = ["application/pdf"];
/// let acc = validate_uploaded_file(Accumulator::new(), &finder_chart, "chart", &allowed);
/// assert_eq!(acc.messages("chart"), vec!["File type 'image/png' is not allowed"]);
/// ```
pub fn validate_uploaded_file<S>(
    acc: Accumulator,
    value: &Value,
    key: &str,
    allowed_mime: &[S],
) -> Accumulator
where
    S: AsRef<str> + Sync,
{
    let accepted = |upload: &Upload| {
        allowed_mime.is_empty() || allowed_mime.iter().any(|m| m.as_ref() == upload.mime)
    };
    let outcome = match value.as_upload() {
        None => Validation::failure(FieldError::NotAnUpload),
        Some(upload) => Validation::success(upload.clone())
            .ensure_with(Upload::is_ok, |failed| FieldError::UploadFailed {
                status: failed.status,
                reason: upload_failure_reason(failed.status).to_string(),
            })
            .ensure_with(accepted, |rejected| FieldError::MimeNotAllowed {
                mime: rejected.mime.clone(),
            }),
    };
    acc.record(key, outcome.map(Value::Upload))
}
