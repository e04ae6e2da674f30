use std::path::Path;

use crate::error::ingest::IngestError;

/// Study identity derived from a `<studyType>-<miovisionId>.<ext>` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyFileName {
    pub study_type: String,
    pub miovision_id: i32,
}

/// Parse the study type and Miovision id out of a workbook path.
///
/// The file stem must split into exactly two dash-separated parts with a
/// numeric second part; anything else is a [`IngestError::MalformedFileName`].
pub fn parse(path: &Path) -> Result<StudyFileName, IngestError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| malformed(path))?;

    let mut parts = stem.split('-');
    let (study_type, id_part) = match (parts.next(), parts.next(), parts.next()) {
        (Some(study_type), Some(id_part), None) => (study_type, id_part),
        _ => return Err(malformed(path)),
    };

    let miovision_id = id_part.parse().map_err(|_| malformed(path))?;

    Ok(StudyFileName {
        study_type: study_type.to_string(),
        miovision_id,
    })
}

fn malformed(path: &Path) -> IngestError {
    IngestError::MalformedFileName(path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_and_id_from_stem() {
        let parsed = parse(Path::new("/data/2020/TMC-12345.xlsx")).unwrap();

        assert_eq!(parsed.study_type, "TMC");
        assert_eq!(parsed.miovision_id, 12345);
    }

    #[test]
    fn rejects_missing_dash() {
        assert!(matches!(
            parse(Path::new("TMC12345.xlsx")),
            Err(IngestError::MalformedFileName(_))
        ));
    }

    #[test]
    fn rejects_extra_dash_segments() {
        assert!(matches!(
            parse(Path::new("TMC-123-45.xlsx")),
            Err(IngestError::MalformedFileName(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(matches!(
            parse(Path::new("TMC-abc.xlsx")),
            Err(IngestError::MalformedFileName(_))
        ));
    }
}
