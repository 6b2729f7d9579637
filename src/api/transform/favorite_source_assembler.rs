use crate::api::dto::favorite_source::{
    CreateFavoriteSourceResource, FavoriteSourceListResource, FavoriteSourceResource,
};
use crate::api::dto::pagination::Page;
use crate::domain::commands::CreateFavoriteSourceCommand;
use crate::domain::entities::FavoriteSource;
use crate::domain::queries::GetAllFavoriteSourcesQuery;

pub fn create_command_from_resource(
    resource: CreateFavoriteSourceResource,
) -> CreateFavoriteSourceCommand {
    CreateFavoriteSourceCommand::new(resource.source)
}

pub fn resource_from_entity(entity: FavoriteSource) -> FavoriteSourceResource {
    FavoriteSourceResource {
        id: entity.id,
        source: entity.source,
    }
}

pub fn get_all_query_from_page(page: Page) -> GetAllFavoriteSourcesQuery {
    GetAllFavoriteSourcesQuery::new(page.offset, page.limit)
}

pub fn list_resource_from_entities(
    entities: Vec<FavoriteSource>,
    page: Page,
) -> FavoriteSourceListResource {
    FavoriteSourceListResource {
        items: entities.into_iter().map(resource_from_entity).collect(),
        page: page.page,
        page_size: page.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::pagination::PaginationParams;

    #[test]
    fn test_command_carries_source() {
        let command = create_command_from_resource(CreateFavoriteSourceResource {
            source: "bbc.com".to_string(),
        });

        assert_eq!(command, CreateFavoriteSourceCommand::new("bbc.com"));
    }

    #[test]
    fn test_resource_projects_entity() {
        let resource = resource_from_entity(FavoriteSource::new(1, "bbc.com".to_string()));

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            serde_json::json!({"id": 1, "source": "bbc.com"})
        );
    }

    #[test]
    fn test_list_resource_keeps_order_and_page() {
        let page = PaginationParams {
            page: Some(2),
            page_size: Some(10),
        }
        .validate()
        .unwrap();

        let list = list_resource_from_entities(
            vec![
                FavoriteSource::new(11, "a.com".to_string()),
                FavoriteSource::new(12, "b.com".to_string()),
            ],
            page,
        );

        assert_eq!(list.page, 2);
        assert_eq!(list.page_size, 10);
        assert_eq!(list.items[0].id, 11);
        assert_eq!(list.items[1].id, 12);
        assert_eq!(get_all_query_from_page(page), GetAllFavoriteSourcesQuery::new(10, 10));
    }
}
