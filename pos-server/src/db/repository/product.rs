//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductFilter, ProductUpdate};
use sqlx::SqlitePool;

const PRODUCT_COLUMNS: &str =
    "id, name, category, price, description, is_active, created_at, updated_at";

fn validate_price(price: f64) -> RepoResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(RepoError::Validation(format!(
            "Price must be a positive number: {price}"
        )));
    }
    Ok(())
}

pub async fn find_all(pool: &SqlitePool, filter: &ProductFilter) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE (?1 IS NULL OR category = ?1) AND (?2 = 0 OR is_active = 1) ORDER BY created_at DESC"
    ))
    .bind(filter.category)
    .bind(filter.active)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(RepoError::Validation("Product name is required".into()));
    }
    validate_price(data.price)?;

    let id = shared::util::new_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO products (id, name, category, price, description, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )
    .bind(&id)
    .bind(name)
    .bind(data.category)
    .bind(data.price)
    .bind(data.description.unwrap_or_default())
    .bind(data.is_active.unwrap_or(true))
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: ProductUpdate) -> RepoResult<Product> {
    if let Some(price) = data.price {
        validate_price(price)?;
    }
    let name = data.name.as_deref().map(str::trim);
    if name.is_some_and(str::is_empty) {
        return Err(RepoError::Validation("Product name is required".into()));
    }

    let rows = sqlx::query(
        "UPDATE products SET name = COALESCE(?1, name), category = COALESCE(?2, category), price = COALESCE(?3, price), description = COALESCE(?4, description), is_active = COALESCE(?5, is_active), updated_at = ?6 WHERE id = ?7",
    )
    .bind(name)
    .bind(data.category)
    .bind(data.price)
    .bind(&data.description)
    .bind(data.is_active)
    .bind(shared::util::now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use shared::models::ServiceCategory;

    fn new_product(name: &str, category: ServiceCategory, active: bool) -> ProductCreate {
        ProductCreate {
            name: name.into(),
            category,
            price: 250.0,
            description: None,
            is_active: Some(active),
        }
    }

    #[tokio::test]
    async fn test_create_defaults() {
        let pool = test_pool().await;
        let product = create(
            &pool,
            ProductCreate {
                is_active: None,
                ..new_product("  Chain lube ", ServiceCategory::Bike, true)
            },
        )
        .await
        .unwrap();
        assert_eq!(product.name, "Chain lube");
        assert_eq!(product.description, "");
        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let pool = test_pool().await;
        let err = create(&pool, new_product("  ", ServiceCategory::Car, true))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = create(
            &pool,
            ProductCreate {
                price: 0.0,
                ..new_product("Wash", ServiceCategory::Car, true)
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_filter_by_category_and_active() {
        let pool = test_pool().await;
        create(&pool, new_product("Brake pads", ServiceCategory::Bike, true))
            .await
            .unwrap();
        create(&pool, new_product("Old tyre", ServiceCategory::Bike, false))
            .await
            .unwrap();
        create(&pool, new_product("Full wash", ServiceCategory::Car, true))
            .await
            .unwrap();

        let all = find_all(&pool, &ProductFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let bikes = find_all(
            &pool,
            &ProductFilter {
                category: Some(ServiceCategory::Bike),
                active: false,
            },
        )
        .await
        .unwrap();
        assert_eq!(bikes.len(), 2);

        let active_bikes = find_all(
            &pool,
            &ProductFilter {
                category: Some(ServiceCategory::Bike),
                active: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(active_bikes.len(), 1);
        assert_eq!(active_bikes[0].name, "Brake pads");
    }

    #[tokio::test]
    async fn test_update_partial() {
        let pool = test_pool().await;
        let product = create(&pool, new_product("Polish", ServiceCategory::Car, true))
            .await
            .unwrap();

        let updated = update(
            &pool,
            &product.id,
            ProductUpdate {
                price: Some(300.0),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Polish");
        assert_eq!(updated.price, 300.0);
        assert!(!updated.is_active);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let pool = test_pool().await;
        let err = update(&pool, "nope", ProductUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(!delete(&pool, "nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let product = create(&pool, new_product("Coolant", ServiceCategory::Car, true))
            .await
            .unwrap();
        assert!(delete(&pool, &product.id).await.unwrap());
        assert!(find_by_id(&pool, &product.id).await.unwrap().is_none());
    }
}
