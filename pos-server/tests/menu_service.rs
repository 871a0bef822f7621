//! Menu service integration tests

mod common;

use common::{seed_menu_group, seed_product, test_pool};
use pos_server::RepoError;
use pos_server::services::MenuService;
use shared::models::{MenuCreate, MenuProductInput};

#[tokio::test]
async fn create_persists_menu_with_line_products() {
    let pool = test_pool().await;
    let americano = seed_product(&pool, "Americano", 5600).await;
    let group = seed_menu_group(&pool, "Beverages").await;
    let service = MenuService::new(pool);

    let saved = service
        .create(MenuCreate {
            name: "Americano Triple".into(),
            price: Some(15000),
            menu_group_id: group.id,
            menu_products: vec![MenuProductInput {
                product_id: americano.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.name, "Americano Triple");
    assert_eq!(saved.price, 15000);
    assert_eq!(saved.menu_group_id, group.id);
    assert_eq!(saved.menu_products.len(), 1);
    assert_eq!(saved.menu_products[0].menu_id, saved.id);
    assert_eq!(saved.menu_products[0].product_id, americano.id);
    assert_eq!(saved.menu_products[0].quantity, 3);
}

#[tokio::test]
async fn create_rejects_missing_price() {
    let pool = test_pool().await;
    let americano = seed_product(&pool, "Americano", 5600).await;
    let group = seed_menu_group(&pool, "Beverages").await;
    let service = MenuService::new(pool);

    let err = service
        .create(MenuCreate {
            name: "Americano Triple".into(),
            price: None,
            menu_group_id: group.id,
            menu_products: vec![MenuProductInput {
                product_id: americano.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_unknown_menu_group() {
    let pool = test_pool().await;
    let americano = seed_product(&pool, "Americano", 5600).await;
    let service = MenuService::new(pool);

    let err = service
        .create(MenuCreate {
            name: "Americano Triple".into(),
            price: Some(15000),
            menu_group_id: -1,
            menu_products: vec![MenuProductInput {
                product_id: americano.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_unknown_product() {
    let pool = test_pool().await;
    let group = seed_menu_group(&pool, "Beverages").await;
    let service = MenuService::new(pool);

    let err = service
        .create(MenuCreate {
            name: "Americano Triple".into(),
            price: Some(15000),
            menu_group_id: group.id,
            menu_products: vec![MenuProductInput {
                product_id: -1,
                quantity: 3,
            }],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn create_rejects_negative_or_excessive_price() {
    let pool = test_pool().await;
    let americano = seed_product(&pool, "Americano", 5600).await;
    let group = seed_menu_group(&pool, "Beverages").await;
    let service = MenuService::new(pool);

    // Line product total is 3 × 5600 = 16800
    for price in [-5, -1, 18000, 20000] {
        let err = service
            .create(MenuCreate {
                name: "Americano Triple".into(),
                price: Some(price),
                menu_group_id: group.id,
                menu_products: vec![MenuProductInput {
                    product_id: americano.id,
                    quantity: 3,
                }],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)), "price {price}");
    }
}

#[tokio::test]
async fn create_accepts_price_equal_to_line_product_total() {
    let pool = test_pool().await;
    let americano = seed_product(&pool, "Americano", 5600).await;
    let group = seed_menu_group(&pool, "Beverages").await;
    let service = MenuService::new(pool);

    let saved = service
        .create(MenuCreate {
            name: "Americano Triple".into(),
            price: Some(16800),
            menu_group_id: group.id,
            menu_products: vec![MenuProductInput {
                product_id: americano.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap();

    assert_eq!(saved.price, 16800);
}

#[tokio::test]
async fn list_returns_menus_with_line_products() {
    let pool = test_pool().await;
    let americano = seed_product(&pool, "Americano", 5600).await;
    let group = seed_menu_group(&pool, "Beverages").await;
    let service = MenuService::new(pool);

    let saved = service
        .create(MenuCreate {
            name: "Americano Triple".into(),
            price: Some(15000),
            menu_group_id: group.id,
            menu_products: vec![MenuProductInput {
                product_id: americano.id,
                quantity: 3,
            }],
        })
        .await
        .unwrap();

    let menus = service.list().await.unwrap();
    let last = menus.last().unwrap();
    assert_eq!(last.id, saved.id);
    assert_eq!(last.menu_products.len(), 1);
    assert_eq!(last.menu_products[0].quantity, 3);
}
