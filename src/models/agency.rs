/// Partner organisation service hours are performed for.
#[derive(Debug, Clone)]
pub struct Agency {
    pub agency_id: i64,
    pub agency_name: String,
    pub category: Option<String>,
    pub location_address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub website_url: Option<String>,
}
