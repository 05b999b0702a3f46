use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a tender. `tenderDeadline` is also accepted as `YYYY-MM-DD`
/// or epoch milliseconds on input.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenderDoc {
    pub id: Option<i64>,
    pub procurement_number: Option<String>,
    pub procuring_entity: Option<String>,
    pub subject_of_procurement: Option<String>,
    pub tender_deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<String>,
    pub budget_amount: f64,
}

#[derive(Serialize, ToSchema)]
pub struct MonthCountDoc { pub month: String, pub count: u64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityCountDoc { pub procuring_entity: String, pub count: u64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenderStatsDoc {
    pub total_tenders: u64,
    pub average_budget: f64,
    pub highest_budget: f64,
    pub lowest_budget: f64,
    pub awarded_tenders: u64,
    pub deadlines_by_month: Vec<MonthCountDoc>,
    pub top_entities: Vec<EntityCountDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::tenders::list,
        crate::routes::tenders::create,
        crate::routes::tenders::get,
        crate::routes::tenders::update,
        crate::routes::tenders::delete,
        crate::routes::tenders::stats,
    ),
    components(
        schemas(
            HealthResponse,
            TenderDoc,
            MonthCountDoc,
            EntityCountDoc,
            TenderStatsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "tenders")
    )
)]
pub struct ApiDoc;
