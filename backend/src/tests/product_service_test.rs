use crate::models::CreateProductRequest;
use crate::services::{ProductCatalog, ProductService};
use crate::tests::common::{create_test_db, insert_product};
use crate::utils::ApiError;

#[tokio::test]
async fn test_list_all_empty() {
    let service = ProductService::new(create_test_db().await);

    let products = service.list_all().await.expect("read empty catalog");
    assert!(products.is_empty(), "Should return empty list when no products");
}

#[tokio::test]
async fn test_list_all_returns_every_record() {
    let pool = create_test_db().await;
    insert_product(&pool, Some("Widget"), Some(5.0)).await;
    insert_product(&pool, None, Some(9.999)).await;
    insert_product(&pool, Some("Gadget"), None).await;
    let service = ProductService::new(pool);

    let products = service.list_all().await.unwrap();
    assert_eq!(products.len(), 3);

    let widget = products.iter().find(|p| p.name.as_deref() == Some("Widget")).unwrap();
    assert_eq!(widget.formatted_price().as_deref(), Some("$5.00"));

    let unnamed = products.iter().find(|p| p.name.is_none()).unwrap();
    assert_eq!(unnamed.formatted_price().as_deref(), Some("$10.00"));
    assert_eq!(unnamed.describe(), "I don't have a name :(");

    let gadget = products.iter().find(|p| p.name.as_deref() == Some("Gadget")).unwrap();
    assert!(gadget.formatted_price().is_none());
}

#[tokio::test]
async fn test_list_all_failure_is_reported() {
    let pool = create_test_db().await;
    let service = ProductService::new(pool.clone());
    pool.close().await;

    match service.list_all().await {
        Err(ApiError::CatalogUnavailable(_)) => {},
        other => panic!("Should report catalog unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_product() {
    let service = ProductService::new(create_test_db().await);

    let product = service
        .create_product(CreateProductRequest { name: Some("Widget".to_string()), price: 12.5 })
        .await
        .expect("create product");

    assert!(product.id > 0);
    assert_eq!(product.name.as_deref(), Some("Widget"));
    assert_eq!(product.price, Some(12.5));
    assert_eq!(service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_product_rejects_invalid_price() {
    let service = ProductService::new(create_test_db().await);

    for price in [-0.01, f64::NAN, f64::INFINITY] {
        let result = service
            .create_product(CreateProductRequest { name: Some("Widget".to_string()), price })
            .await;
        match result {
            Err(ApiError::ValidationError(_)) => {},
            other => panic!("price {} should be rejected, got {:?}", price, other),
        }
    }

    assert!(service.list_all().await.unwrap().is_empty(), "Nothing should be written");
}

#[tokio::test]
async fn test_import_products_is_atomic() {
    let service = ProductService::new(create_test_db().await);

    let batch = vec![
        CreateProductRequest { name: Some("Widget".to_string()), price: 5.0 },
        CreateProductRequest { name: Some("Broken".to_string()), price: -3.0 },
    ];
    let result = service.import_products(batch).await;
    assert!(matches!(result, Err(ApiError::ValidationError(_))));
    assert!(service.list_all().await.unwrap().is_empty());

    let batch = vec![
        CreateProductRequest { name: Some("Widget".to_string()), price: 5.0 },
        CreateProductRequest { name: None, price: 0.0 },
    ];
    assert_eq!(service.import_products(batch).await.unwrap(), 2);
    assert_eq!(service.list_all().await.unwrap().len(), 2);
}
