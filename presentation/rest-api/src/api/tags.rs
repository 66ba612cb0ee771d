use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    ShelfLife,
    Suggestions,
    Expiry,
    Urgency,
}
