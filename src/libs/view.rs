use super::formatter::{format_duration, format_timestamp};
use super::normalizer::{validate_date_range, NormalizeSummary};
use super::work_item::WorkItem;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn items(items: &[WorkItem]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PRODUCT", "START", "END", "DURATION", "KM", "AMOUNT"]);
        for item in items {
            table.add_row(row![
                item.id,
                item.product,
                format_timestamp(&item.start),
                format_timestamp(&item.end),
                format_duration(&item.duration()),
                item.km,
                item.amount
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn validation(items: &[WorkItem]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PRODUCT", "START", "END", "VALID"]);
        for item in items {
            let valid = if validate_date_range(Some(item)) { "yes" } else { "no" };
            table.add_row(row![
                item.id,
                item.product,
                format_timestamp(&item.start),
                format_timestamp(&item.end),
                valid
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &NormalizeSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ITEMS", "ADJUSTED", "TOTAL BEFORE", "TOTAL AFTER"]);
        table.add_row(row![
            summary.total,
            summary.adjusted,
            format_duration(&summary.total_before),
            format_duration(&summary.total_after)
        ]);
        table.printstd();

        Ok(())
    }
}
