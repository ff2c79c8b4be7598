use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct RegisterRequest { pub email: String, pub name: String }

#[derive(utoipa::ToSchema)]
pub struct AddressDoc { pub city: String, pub state: String }

#[derive(utoipa::ToSchema)]
pub struct PersonRequest {
    pub firstname: String,
    pub lastname: String,
    pub address: Option<AddressDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::get_user,
        crate::routes::people::list_people,
        crate::routes::people::get_person,
        crate::routes::people::create_person,
        crate::routes::people::delete_person,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            AddressDoc,
            PersonRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "people")
    )
)]
pub struct ApiDoc;
