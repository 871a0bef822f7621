//! Order service integration tests

mod common;

use common::{seed_menu, seed_menu_group, seed_product, seed_table, test_pool};
use pos_server::RepoError;
use pos_server::services::OrderService;
use shared::models::{MenuFull, OrderCreate, OrderLineItemInput, OrderStatus, OrderTable};
use sqlx::SqlitePool;

/// Menu group + priced menu + occupied table, ready to order against
async fn seed_floor(pool: &SqlitePool) -> (MenuFull, OrderTable) {
    let group = seed_menu_group(pool, "Beverages").await;
    let americano = seed_product(pool, "Americano", 1000).await;
    let menu = seed_menu(pool, "Americano", 1000, group.id, americano.id, 1).await;
    let table = seed_table(pool, 0, false).await;
    (menu, table)
}

#[tokio::test]
async fn create_opens_order_in_cooking() {
    let pool = test_pool().await;
    let (menu, table) = seed_floor(&pool).await;
    let service = OrderService::new(pool);

    let saved = service
        .create(OrderCreate {
            order_table_id: table.id,
            order_line_items: vec![OrderLineItemInput {
                menu_id: menu.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap();

    assert_eq!(saved.order_status, OrderStatus::Cooking);
    assert!(saved.ordered_time > 0);
    assert_eq!(saved.order_table_id, table.id);
    assert_eq!(saved.order_line_items.len(), 1);
    assert_eq!(saved.order_line_items[0].order_id, saved.id);
    assert_eq!(saved.order_line_items[0].quantity, 3);
}

#[tokio::test]
async fn create_rejects_empty_line_items() {
    let pool = test_pool().await;
    let (_, table) = seed_floor(&pool).await;
    let service = OrderService::new(pool);

    let err = service
        .create(OrderCreate {
            order_table_id: table.id,
            order_line_items: vec![],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_unknown_menu() {
    let pool = test_pool().await;
    let (_, table) = seed_floor(&pool).await;
    let service = OrderService::new(pool);

    let err = service
        .create(OrderCreate {
            order_table_id: table.id,
            order_line_items: vec![OrderLineItemInput {
                menu_id: -1,
                quantity: 3,
            }],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_unknown_table() {
    let pool = test_pool().await;
    let (menu, _) = seed_floor(&pool).await;
    let service = OrderService::new(pool);

    let err = service
        .create(OrderCreate {
            order_table_id: -1,
            order_line_items: vec![OrderLineItemInput {
                menu_id: menu.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn list_grows_after_create() {
    let pool = test_pool().await;
    let (menu, table) = seed_floor(&pool).await;
    let service = OrderService::new(pool);
    let origin_size = service.list().await.unwrap().len();

    service
        .create(OrderCreate {
            order_table_id: table.id,
            order_line_items: vec![OrderLineItemInput {
                menu_id: menu.id,
                quantity: 1,
            }],
        })
        .await
        .unwrap();

    let orders = service.list().await.unwrap();
    assert_eq!(orders.len(), origin_size + 1);
    assert_eq!(orders.last().unwrap().order_line_items.len(), 1);
}

#[tokio::test]
async fn change_order_status_to_meal() {
    let pool = test_pool().await;
    let (menu, table) = seed_floor(&pool).await;
    let service = OrderService::new(pool);

    let saved = service
        .create(OrderCreate {
            order_table_id: table.id,
            order_line_items: vec![OrderLineItemInput {
                menu_id: menu.id,
                quantity: 1,
            }],
        })
        .await
        .unwrap();

    let changed = service
        .change_order_status(saved.id, OrderStatus::Meal)
        .await
        .unwrap();

    assert_eq!(changed.order_status, OrderStatus::Meal);
    assert_eq!(changed.id, saved.id);
}

#[tokio::test]
async fn change_order_status_rejects_unknown_order() {
    let pool = test_pool().await;
    let service = OrderService::new(pool);

    let err = service
        .change_order_status(-1, OrderStatus::Meal)
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn change_order_status_rejects_completed_order() {
    let pool = test_pool().await;
    let (menu, table) = seed_floor(&pool).await;
    let service = OrderService::new(pool);

    let saved = service
        .create(OrderCreate {
            order_table_id: table.id,
            order_line_items: vec![OrderLineItemInput {
                menu_id: menu.id,
                quantity: 1,
            }],
        })
        .await
        .unwrap();

    service
        .change_order_status(saved.id, OrderStatus::Completion)
        .await
        .unwrap();

    let err = service
        .change_order_status(saved.id, OrderStatus::Meal)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // The stored status is untouched
    let orders = service.list().await.unwrap();
    let stored = orders.iter().find(|o| o.id == saved.id).unwrap();
    assert_eq!(stored.order_status, OrderStatus::Completion);
}
