//! Endpoint paths, relative to the configured base URL.

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PROFILE: &str = "/profil";
pub const RESET_PASSWORD_REQUEST: &str = "/reset-password-request";

pub const SHOP_SETUP: &str = "/bengkel-management/simpan-data-bengkel";
pub const SHOP_VALIDATION: &str = "/bengkel-management/cek-validasi";

pub const CATALOG_LIST: &str = "/bengkel-management/layanan-bengkel";
pub const CATALOG_CREATE: &str = "/bengkel-management/daftar-layanan";

pub fn catalog_update(id: i64) -> String {
    format!("/bengkel-management/update-layanan/{}", id)
}

pub fn catalog_delete(id: i64) -> String {
    format!("/bengkel-management/hapus-layanan/{}", id)
}

pub const ROSTER_LIST: &str = "/bengkel-management/montir/list-montir";
pub const ROSTER_CREATE: &str = "/bengkel-management/montir/tambah-montir";

pub fn roster_delete(id: i64) -> String {
    format!("/bengkel-management/montir/hapus-montir/{}", id)
}

pub const SHOP_ORDERS: &str = "/bengkel-management/order-layanan/list-order-bengkel";

/// The order id travels in the path; the body carries only `montir_id`
pub fn assign_mechanic(order_id: i64) -> String {
    format!("/bengkel-management/order-layanan/assign-montir/{}", order_id)
}

pub fn order_detail(order_id: i64) -> String {
    format!("/order-layanan/detail-order/{}", order_id)
}

pub const MECHANIC_ORDERS: &str = "/montir/order-layanan/list-order-montir";

pub fn head_to_location(order_id: i64) -> String {
    format!("/montir/order-layanan/menuju-lokasi/{}", order_id)
}

pub fn start_work(order_id: i64) -> String {
    format!("/montir/order-layanan/mulai-pengerjaan/{}", order_id)
}

pub fn add_line_items(order_id: i64) -> String {
    format!("/montir/order-layanan/tambah-item/{}", order_id)
}

pub fn request_payment(order_id: i64) -> String {
    format!("/montir/order-layanan/minta-pembayaran/{}", order_id)
}

pub const SHOP_SEARCH: &str = "/public/cari-bengkel";
pub const CREATE_ORDER: &str = "/order-layanan/buat-order";
pub const ORDER_HISTORY: &str = "/order-layanan/order-history";
pub const PROFILE_UPDATE: &str = "/profil/update";
pub const PASSWORD_CHANGE: &str = "/profil/ubah-password";

pub fn submit_review(order_id: i64) -> String {
    format!("/order-layanan/review/{}", order_id)
}

pub const PAYMENT_CREATE: &str = "/payment/create";
