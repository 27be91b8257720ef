#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::Path;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worknorm::libs::records::{RecordFile, RecordFormat};
    use worknorm::libs::work_item::WorkItem;

    struct RecordsTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            RecordsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn sample_items() -> Vec<WorkItem> {
        vec![
            WorkItem::new(1, "Product A", at(1, 8), at(1, 12), 100.0, 1000.0),
            WorkItem::new(2, "Product B, large", at(2, 9), at(2, 13), 150.5, 1500.25),
            WorkItem::new(2, "Product C", at(3, 10), at(3, 9), 0.0, -20.0),
        ]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(RecordFormat::from_path(Path::new("items.csv")), Some(RecordFormat::Csv));
        assert_eq!(RecordFormat::from_path(Path::new("items.JSON")), Some(RecordFormat::Json));
        assert_eq!(RecordFormat::from_path(Path::new("items.txt")), None);
        assert_eq!(RecordFormat::from_path(Path::new("items")), None);
    }

    #[test]
    fn test_unknown_extension_without_format() {
        let error = RecordFile::new("items.txt", None).unwrap_err();
        assert!(error.to_string().contains("items.txt"));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let file = RecordFile::new("items.txt", Some(RecordFormat::Json)).unwrap();
        assert_eq!(file.format(), RecordFormat::Json);

        let file = RecordFile::new("items.json", Some(RecordFormat::Csv)).unwrap();
        assert_eq!(file.format(), RecordFormat::Csv);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_csv_write_and_read(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("items.csv");
        let file = RecordFile::new(&path, None).unwrap();
        let items = sample_items();

        file.write(&items).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("id,product,start,end,km,amount"));
        assert!(content.contains("\"Product B, large\""));

        assert_eq!(file.read().unwrap(), items);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_json_write_and_read(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("items.json");
        let file = RecordFile::new(&path, None).unwrap();
        let items = sample_items();

        file.write(&items).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"product\": \"Product A\""));
        assert!(content.contains("\"start\": \"2026-01-01T08:00:00\""));

        assert_eq!(file.read().unwrap(), items);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_empty_csv_keeps_header(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("empty.csv");
        let file = RecordFile::new(&path, None).unwrap();

        file.write(&[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "id,product,start,end,km,amount");
        assert!(file.read().unwrap().is_empty());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_read_handwritten_csv(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("handwritten.csv");
        std::fs::write(
            &path,
            "id,product,start,end,km,amount\n\
             7,Product X,2026-01-05T06:30:00,2026-01-05T09:00:00,12,345.5\n",
        )
        .unwrap();

        let items = RecordFile::new(&path, None).unwrap().read().unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
        assert_eq!(items[0].product, "Product X");
        assert_eq!(items[0].start, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap().and_hms_opt(6, 30, 0).unwrap());
        assert_eq!(items[0].km, 12.0);
        assert_eq!(items[0].amount, 345.5);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_read_malformed_csv(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("broken.csv");
        std::fs::write(&path, "id,product,start,end,km,amount\n1,Product A,yesterday,today,1,2\n").unwrap();

        let error = RecordFile::new(&path, None).unwrap().read().unwrap_err();

        assert!(error.to_string().contains("broken.csv"));
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_read_missing_file(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("missing.json");
        let file = RecordFile::new(&path, None).unwrap();

        assert!(!file.exists());
        assert!(file.read().is_err());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_write_overwrites(ctx: &mut RecordsTestContext) {
        let path = ctx.temp_dir.path().join("items.json");
        let file = RecordFile::new(&path, None).unwrap();
        let items = sample_items();

        file.write(&items).unwrap();
        file.write(&items[..1]).unwrap();

        assert_eq!(file.read().unwrap(), items[..1].to_vec());
    }
}
