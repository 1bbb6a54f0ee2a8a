use crate::domain::a002_order::Order;
use crate::domain::a004_date_track::DateTracks;
use crate::shared::xlsx::{ExcelExportable, ExportError, Worksheet};
use chrono::NaiveDate;
use std::fmt;

/// Категория заказов, она же имя листа и часть имени файла
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCategory {
    Stock,
    Reallocation,
}

impl ExportCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Reallocation => "Reallocation",
        }
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Строка выгрузки: заказ + логистика по шасси
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportRow {
    pub chassis: String,
    pub customer: String,
    pub model: String,
    pub model_year: String,
    pub dealer: String,
    pub forecast_production_date: String,
    pub dispatched_from_factory: String,
    pub left_port: String,
    pub received_in_melbourne: String,
}

impl ExcelExportable for ExportRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Chassis",
            "Customer",
            "Model",
            "Model Year",
            "Dealer",
            "Forecast Production Date",
            "Dispatched from Factory",
            "Left Port",
            "Received in Melbourne",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.chassis.clone(),
            self.customer.clone(),
            self.model.clone(),
            self.model_year.clone(),
            self.dealer.clone(),
            self.forecast_production_date.clone(),
            self.dispatched_from_factory.clone(),
            self.left_port.clone(),
            self.received_in_melbourne.clone(),
        ]
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn export_rows(orders: &[Order], date_tracks: &DateTracks) -> Vec<ExportRow> {
    orders
        .iter()
        .map(|order| {
            let track = date_tracks
                .find_for_chassis(order.chassis_key())
                .cloned()
                .unwrap_or_default();

            ExportRow {
                chassis: text(&order.chassis),
                customer: text(&order.customer),
                model: text(&order.model),
                model_year: text(&order.model_year),
                dealer: text(&order.dealer),
                forecast_production_date: text(&order.forecast_production_date),
                dispatched_from_factory: text(&track.dispatched_from_factory),
                left_port: text(&track.left_port),
                received_in_melbourne: text(&track.received_in_melbourne),
            }
        })
        .collect()
}

/// `{DealerDisplayName}_{Category}_{YYYY-MM-DD}.xlsx`
pub fn export_filename(display_name: &str, category: ExportCategory, date: NaiveDate) -> String {
    format!("{}_{}_{}.xlsx", display_name, category, date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Build the workbook for the orders currently on screen.
///
/// Returns `Ok(None)` when there is nothing to export.
pub fn build_export(
    orders: &[Order],
    date_tracks: &DateTracks,
    display_name: &str,
    category: ExportCategory,
    today: NaiveDate,
) -> Result<Option<ExportFile>, ExportError> {
    if orders.is_empty() {
        return Ok(None);
    }

    let rows = export_rows(orders, date_tracks);
    let sheet = Worksheet::from_items(category.as_str(), &rows);
    let bytes = sheet.to_xlsx()?;

    Ok(Some(ExportFile {
        filename: export_filename(display_name, category, today),
        bytes,
    }))
}
