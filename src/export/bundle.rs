use crate::domain::model::Artifact;
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// 把所有匯出檔案打包成一個 ZIP
pub fn zip_artifacts(artifacts: &[Artifact]) -> Result<Vec<u8>> {
    tracing::debug!("Creating ZIP bundle with {} files", artifacts.len());

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for artifact in artifacts {
        zip.start_file::<_, ()>(artifact.file_name.as_str(), FileOptions::default())?;
        zip.write_all(&artifact.bytes)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExportFormat;
    use std::io::Read;

    #[test]
    fn test_zip_contains_every_artifact() {
        let artifacts = vec![
            Artifact {
                format: ExportFormat::Csv,
                file_name: "numerology_breakdown.csv".to_string(),
                bytes: b"Character,Alphabet_Number,Mapped_Value\n".to_vec(),
            },
            Artifact {
                format: ExportFormat::Json,
                file_name: "numerology_report.json".to_string(),
                bytes: b"{}".to_vec(),
            },
        ];

        let data = zip_artifacts(&artifacts).unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut json = String::new();
        archive
            .by_name("numerology_report.json")
            .unwrap()
            .read_to_string(&mut json)
            .unwrap();
        assert_eq!(json, "{}");
    }
}
