//! Seeds the default set of categories.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SEED_CATEGORIES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(UNSEED_CATEGORIES_SQL).await?;
        Ok(())
    }
}

const SEED_CATEGORIES_SQL: &str = r"
INSERT INTO categories (id, name, kind, active) VALUES
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0001', 'Product Sales', 'income', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0002', 'Service Revenue', 'income', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0003', 'Interest and Investment Income', 'income', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0004', 'Other Operating Income', 'income', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0005', 'Salaries and Benefits', 'expense', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0006', 'Rent and Facilities', 'expense', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0007', 'Inventory Purchases', 'expense', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0008', 'Taxes and Fees', 'expense', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0009', 'Marketing', 'expense', TRUE),
    ('0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0010', 'Administrative Expenses', 'expense', TRUE);
";

const UNSEED_CATEGORIES_SQL: &str = r"
DELETE FROM categories WHERE id IN (
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0001',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0002',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0003',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0004',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0005',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0006',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0007',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0008',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0009',
    '0b40f9da-6f4f-4e22-9d1f-1c1a1a6e0010'
);
";
