use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::modules::movie::model::Movie,
            crate::modules::movie::model::Genre,
            crate::modules::movie::dto::CreateMovieRequest,
            crate::modules::movie::dto::UpdateMovieRequest,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalog management")
    )
)]
pub struct ApiDoc;
