/// Выгрузка заказов в Excel и скачивание файла через браузер
use contracts::domain::a002_order::Order;
use contracts::domain::a004_date_track::DateTracks;
use contracts::projections::p900_dealer_inventory::{build_export, ExportCategory};
use contracts::shared::xlsx::XLSX_MIME;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Экспортирует заказы в xlsx и инициирует скачивание.
///
/// Пустой список: ничего не делаем. Ошибки только логируются,
/// страница продолжает работать.
pub fn export_orders(
    orders: &[Order],
    date_tracks: &DateTracks,
    display_name: &str,
    category: ExportCategory,
) {
    let today = chrono::Utc::now().date_naive();

    let file = match build_export(orders, date_tracks, display_name, category, today) {
        Ok(Some(file)) => file,
        Ok(None) => {
            log::debug!("Nothing to export for {}", category);
            return;
        }
        Err(e) => {
            log::error!("Export of {} orders failed: {}", category, e);
            return;
        }
    };

    match download_bytes(&file.bytes, &file.filename, XLSX_MIME) {
        Ok(()) => log::info!("Exported {} orders to {}", orders.len(), file.filename),
        Err(e) => log::error!("Export of {} orders failed: {}", category, e),
    }
}

/// Создает Blob объект с бинарными данными
fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание через временную ссылку
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let blob = create_blob(bytes, mime)?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    // Освобождаем URL
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
