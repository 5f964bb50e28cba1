#[cfg(test)]
mod tests {
    use crate::error::DataLoadError;
    use crate::io::checksum::calculate_checksum;
    use crate::io::loaders::DatasetLoader;
    use crate::models::{FlightNumber, Outcome};
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    fn sample_csv() -> String {
        format!(
            "{HEADER}\n\
             1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n\
             2,CCAFS LC-40,1,525,F9 v1.0  B0004,v1.0\n\
             3,KSC LC-39A,1,9600.5,F9 FT B1031.1,FT\n\
             4,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1\n"
        )
    }

    #[test]
    fn test_load_from_str_basic() {
        let dataset = DatasetLoader::load_from_str(&sample_csv()).unwrap();

        assert_eq!(dataset.len(), 4);
        let first = &dataset.records()[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.outcome, Outcome::Failure);
        assert_eq!(first.flight_number, FlightNumber::new(1));
        assert_eq!(first.booster_version, "F9 v1.0  B0003");
        assert_eq!(first.booster_version_category, "v1.0");

        assert_eq!(dataset.min_payload().value(), 0.0);
        assert_eq!(dataset.max_payload().value(), 9600.5);
        assert_eq!(
            dataset.site_catalog().sites(),
            &["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_records_keep_source_order() {
        let dataset = DatasetLoader::load_from_str(&sample_csv()).unwrap();
        let numbers: Vec<u32> = dataset
            .records()
            .iter()
            .map(|r| r.flight_number.value())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = create_temp_csv(&sample_csv());
        let dataset = DatasetLoader::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(
            dataset.checksum(),
            calculate_checksum(sample_csv().as_bytes())
        );
    }

    #[test]
    fn test_load_from_reader() {
        let csv = sample_csv();
        let dataset = DatasetLoader::load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_missing_file() {
        let result = DatasetLoader::load_from_file(Path::new("/nonexistent/spacex.csv"));
        match result {
            Err(DataLoadError::MissingSource { path }) => {
                assert_eq!(path, Path::new("/nonexistent/spacex.csv"))
            }
            other => panic!("expected MissingSource, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Flight Number,Launch Site,Payload Mass (kg),Booster Version,Booster Version Category\n\
                   1,CCAFS LC-40,0,F9 v1.0  B0003,v1.0\n";
        let result = DatasetLoader::load_from_str(csv);
        assert!(matches!(
            result,
            Err(DataLoadError::MissingColumn { column: "class" })
        ));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        // pandas exports carry an unnamed index column in front
        let csv = format!(
            ",{HEADER},Mission Outcome\n0,1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0,Success\n"
        );
        let dataset = DatasetLoader::load_from_str(&csv).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].site, "CCAFS LC-40");
    }

    #[test]
    fn test_headers_and_fields_are_trimmed() {
        let csv = "Flight Number, Launch Site ,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                   7 , KSC LC-39A , 1 , 2500 ,F9 FT B1029.2, FT \n";
        let dataset = DatasetLoader::load_from_str(csv).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.site, "KSC LC-39A");
        assert_eq!(record.booster_version_category, "FT");
        assert_eq!(record.flight_number.value(), 7);
        assert_eq!(record.payload_mass.value(), 2500.0);
    }

    #[test]
    fn test_float_encoded_integers_accepted() {
        let csv = format!("{HEADER}\n12.0,KSC LC-39A,1.0,2500,F9 FT B1029.2,FT\n");
        let dataset = DatasetLoader::load_from_str(&csv).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.flight_number.value(), 12);
        assert_eq!(record.outcome, Outcome::Success);
    }

    #[test]
    fn test_unparseable_payload() {
        let csv = format!(
            "{HEADER}\n1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n2,CCAFS LC-40,1,heavy,F9 v1.0  B0004,v1.0\n"
        );
        match DatasetLoader::load_from_str(&csv) {
            Err(DataLoadError::InvalidField {
                row, column, value, ..
            }) => {
                assert_eq!(row, 2);
                assert_eq!(column, "Payload Mass (kg)");
                assert_eq!(value, "heavy");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_payload_rejected() {
        let csv = format!("{HEADER}\n1,CCAFS LC-40,0,-5,F9 v1.0  B0003,v1.0\n");
        assert!(matches!(
            DatasetLoader::load_from_str(&csv),
            Err(DataLoadError::InvalidField { row: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite_payload_rejected() {
        let csv = format!("{HEADER}\n1,CCAFS LC-40,0,NaN,F9 v1.0  B0003,v1.0\n");
        assert!(matches!(
            DatasetLoader::load_from_str(&csv),
            Err(DataLoadError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_invalid_class_rejected() {
        let csv = format!("{HEADER}\n1,CCAFS LC-40,2,0,F9 v1.0  B0003,v1.0\n");
        match DatasetLoader::load_from_str(&csv) {
            Err(DataLoadError::InvalidField { column, value, .. }) => {
                assert_eq!(column, "class");
                assert_eq!(value, "2");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_flight_number_rejected() {
        let csv = format!("{HEADER}\n1.5,CCAFS LC-40,1,0,F9 v1.0  B0003,v1.0\n");
        assert!(matches!(
            DatasetLoader::load_from_str(&csv),
            Err(DataLoadError::InvalidField {
                column: "Flight Number",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_site_rejected() {
        let csv = format!("{HEADER}\n1,,1,0,F9 v1.0  B0003,v1.0\n");
        assert!(matches!(
            DatasetLoader::load_from_str(&csv),
            Err(DataLoadError::InvalidField {
                column: "Launch Site",
                ..
            })
        ));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv = format!("{HEADER}\n1,CCAFS LC-40,1\n");
        assert!(matches!(
            DatasetLoader::load_from_str(&csv),
            Err(DataLoadError::Csv(_))
        ));
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let csv = format!("{HEADER}\n");
        assert!(matches!(
            DatasetLoader::load_from_str(&csv),
            Err(DataLoadError::EmptyDataset)
        ));
    }
}
