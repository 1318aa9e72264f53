use crate::core::numerology::alphabet_position;
use crate::domain::model::NameNumbers;
use crate::utils::error::{NumerologyError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BreakdownRow {
    #[serde(rename = "Character")]
    character: char,
    #[serde(rename = "Alphabet_Number")]
    alphabet_number: u32,
    #[serde(rename = "Mapped_Value")]
    mapped_value: u32,
}

/// 每個字元一列：Character, Alphabet_Number, Mapped_Value
pub fn breakdown_csv(name: &NameNumbers) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if name.breakdown.is_empty() {
        writer.write_record(["Character", "Alphabet_Number", "Mapped_Value"])?;
    }

    for cv in &name.breakdown {
        writer.serialize(BreakdownRow {
            character: cv.character,
            alphabet_number: alphabet_position(cv.character),
            mapped_value: cv.value,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| NumerologyError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::numerology::compute_numerology;
    use crate::domain::model::Settings;

    #[test]
    fn test_csv_layout() {
        let name = compute_numerology("Ada 7", &Settings::default());
        let csv = String::from_utf8(breakdown_csv(&name).unwrap()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Character,Alphabet_Number,Mapped_Value");
        assert_eq!(lines[1], "A,1,1");
        assert_eq!(lines[2], "D,4,4");
        assert_eq!(lines[3], "A,1,1");
        assert_eq!(lines[4], "7,7,7");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_csv_totals_match_expression() {
        let name = compute_numerology("Grace Hopper", &Settings::default());
        let bytes = breakdown_csv(&name).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let total: u64 = reader
            .records()
            .map(|r| r.unwrap()[2].parse::<u64>().unwrap())
            .sum();
        assert_eq!(total, name.expression.total);
    }

    #[test]
    fn test_csv_for_name_without_alphanumerics_has_header_only() {
        let name = compute_numerology("!!!", &Settings::default());
        let csv = String::from_utf8(breakdown_csv(&name).unwrap()).unwrap();
        assert_eq!(csv, "Character,Alphabet_Number,Mapped_Value\n");
    }
}
