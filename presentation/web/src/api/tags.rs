use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Page,
    Products,
    Providers,
    Stats,
    Session,
    Feed,
    Weather,
    News,
}
