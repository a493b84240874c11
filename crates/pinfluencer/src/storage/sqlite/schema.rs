//! SQLite schema definitions and column lists.
//!
//! Pure data, no I/O. Column lists are shared by the entity row readers and
//! the generic table queries, so their order is the order `from_row` expects.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Brands table
CREATE TABLE IF NOT EXISTS brand (
    id TEXT PRIMARY KEY,
    created TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    auth_user_id TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    website TEXT NOT NULL,
    logo TEXT,
    header_image TEXT,
    instahandle TEXT,
    "values" TEXT NOT NULL DEFAULT '[]',
    categories TEXT NOT NULL DEFAULT '[]'
);

-- Influencers table
CREATE TABLE IF NOT EXISTS influencer (
    id TEXT PRIMARY KEY,
    created TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    auth_user_id TEXT NOT NULL UNIQUE,
    website TEXT NOT NULL,
    bio TEXT NOT NULL,
    image TEXT,
    instahandle TEXT,
    audience_age_13_to_17_split REAL,
    audience_age_18_to_24_split REAL,
    audience_age_25_to_34_split REAL,
    audience_age_35_to_44_split REAL,
    audience_age_45_to_54_split REAL,
    audience_age_55_to_64_split REAL,
    audience_age_65_plus_split REAL,
    audience_male_split REAL,
    audience_female_split REAL,
    "values" TEXT NOT NULL DEFAULT '[]',
    categories TEXT NOT NULL DEFAULT '[]'
);

-- Products table
CREATE TABLE IF NOT EXISTS product (
    id TEXT PRIMARY KEY,
    created TEXT NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    requirements TEXT NOT NULL,
    image TEXT,
    brand_id TEXT NOT NULL,
    FOREIGN KEY (brand_id) REFERENCES brand(id) ON DELETE CASCADE
);

-- Campaigns table
CREATE TABLE IF NOT EXISTS campaign (
    id TEXT PRIMARY KEY,
    created TEXT NOT NULL,
    brand_id TEXT NOT NULL,
    state TEXT NOT NULL DEFAULT 'DRAFT',
    objective TEXT NOT NULL,
    success_description TEXT NOT NULL,
    campaign_title TEXT NOT NULL,
    campaign_description TEXT NOT NULL,
    campaign_categories TEXT NOT NULL DEFAULT '[]',
    campaign_values TEXT NOT NULL DEFAULT '[]',
    campaign_product_link TEXT NOT NULL,
    campaign_hashtag TEXT NOT NULL,
    campaign_discount_code TEXT NOT NULL,
    product_title TEXT NOT NULL,
    product_description TEXT NOT NULL,
    product_image1 TEXT,
    product_image2 TEXT,
    product_image3 TEXT,
    FOREIGN KEY (brand_id) REFERENCES brand(id) ON DELETE CASCADE
);

-- Indexes for owner lookups
CREATE INDEX IF NOT EXISTS idx_product_brand_id ON product(brand_id);
CREATE INDEX IF NOT EXISTS idx_campaign_brand_id ON campaign(brand_id);
"#;

/// Enforced per connection, so it runs on every open.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

pub const BRAND_TABLE: &str = "brand";

pub const BRAND_COLUMNS: &str = r#"id, created, first_name, last_name, email, auth_user_id, name, description, website, logo, header_image, instahandle, "values", categories"#;

pub const INSERT_BRAND: &str = r#"
INSERT INTO brand (id, created, first_name, last_name, email, auth_user_id, name, description, website, logo, header_image, instahandle, "values", categories)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
"#;

pub const UPDATE_BRAND: &str = r#"
UPDATE brand
SET first_name = ?2, last_name = ?3, email = ?4, name = ?5, description = ?6,
    website = ?7, instahandle = ?8, "values" = ?9, categories = ?10
WHERE id = ?1
"#;

pub const INFLUENCER_TABLE: &str = "influencer";

pub const INFLUENCER_COLUMNS: &str = r#"id, created, first_name, last_name, email, auth_user_id, website, bio, image, instahandle, audience_age_13_to_17_split, audience_age_18_to_24_split, audience_age_25_to_34_split, audience_age_35_to_44_split, audience_age_45_to_54_split, audience_age_55_to_64_split, audience_age_65_plus_split, audience_male_split, audience_female_split, "values", categories"#;

pub const INSERT_INFLUENCER: &str = r#"
INSERT INTO influencer (id, created, first_name, last_name, email, auth_user_id, website, bio, image, instahandle,
    audience_age_13_to_17_split, audience_age_18_to_24_split, audience_age_25_to_34_split,
    audience_age_35_to_44_split, audience_age_45_to_54_split, audience_age_55_to_64_split,
    audience_age_65_plus_split, audience_male_split, audience_female_split, "values", categories)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21)
"#;

pub const UPDATE_INFLUENCER: &str = r#"
UPDATE influencer
SET first_name = ?2, last_name = ?3, email = ?4, website = ?5, bio = ?6, instahandle = ?7,
    audience_age_13_to_17_split = ?8, audience_age_18_to_24_split = ?9, audience_age_25_to_34_split = ?10,
    audience_age_35_to_44_split = ?11, audience_age_45_to_54_split = ?12, audience_age_55_to_64_split = ?13,
    audience_age_65_plus_split = ?14, audience_male_split = ?15, audience_female_split = ?16,
    "values" = ?17, categories = ?18
WHERE id = ?1
"#;

pub const PRODUCT_TABLE: &str = "product";

pub const PRODUCT_COLUMNS: &str =
    "id, created, name, description, requirements, image, brand_id";

pub const INSERT_PRODUCT: &str = r#"
INSERT INTO product (id, created, name, description, requirements, image, brand_id)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE product
SET name = ?2, description = ?3, requirements = ?4
WHERE id = ?1
"#;

pub const CAMPAIGN_TABLE: &str = "campaign";

pub const CAMPAIGN_COLUMNS: &str = "id, created, brand_id, state, objective, success_description, campaign_title, campaign_description, campaign_categories, campaign_values, campaign_product_link, campaign_hashtag, campaign_discount_code, product_title, product_description, product_image1, product_image2, product_image3";

pub const INSERT_CAMPAIGN: &str = r#"
INSERT INTO campaign (id, created, brand_id, state, objective, success_description, campaign_title,
    campaign_description, campaign_categories, campaign_values, campaign_product_link, campaign_hashtag,
    campaign_discount_code, product_title, product_description, product_image1, product_image2, product_image3)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)
"#;

pub const UPDATE_CAMPAIGN: &str = r#"
UPDATE campaign
SET state = ?2, objective = ?3, success_description = ?4, campaign_title = ?5, campaign_description = ?6,
    campaign_categories = ?7, campaign_values = ?8, campaign_product_link = ?9, campaign_hashtag = ?10,
    campaign_discount_code = ?11, product_title = ?12, product_description = ?13
WHERE id = ?1
"#;

/// `SELECT <columns> FROM <table> ORDER BY rowid`.
pub fn select_all(table: &str, columns: &str) -> String {
    format!("SELECT {columns} FROM {table} ORDER BY rowid")
}

/// `SELECT <columns> FROM <table> WHERE <column> = ?1 ORDER BY rowid`.
pub fn select_where(table: &str, columns: &str, column: &str) -> String {
    format!("SELECT {columns} FROM {table} WHERE {column} = ?1 ORDER BY rowid")
}

/// `UPDATE <table> SET <column> = ?2 WHERE id = ?1`.
pub fn update_column(table: &str, column: &str) -> String {
    format!("UPDATE {table} SET {column} = ?2 WHERE id = ?1")
}

/// `DELETE FROM <table> WHERE id = ?1`.
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {table} WHERE id = ?1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_where_keeps_insertion_order() {
        assert_eq!(
            select_where(PRODUCT_TABLE, PRODUCT_COLUMNS, "brand_id"),
            "SELECT id, created, name, description, requirements, image, brand_id FROM product WHERE brand_id = ?1 ORDER BY rowid"
        );
    }

    #[test]
    fn test_update_column() {
        assert_eq!(
            update_column(BRAND_TABLE, "logo"),
            "UPDATE brand SET logo = ?2 WHERE id = ?1"
        );
    }

    #[test]
    fn test_schema_creates_in_memory() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        for (table, columns) in [
            (BRAND_TABLE, BRAND_COLUMNS),
            (INFLUENCER_TABLE, INFLUENCER_COLUMNS),
            (PRODUCT_TABLE, PRODUCT_COLUMNS),
            (CAMPAIGN_TABLE, CAMPAIGN_COLUMNS),
        ] {
            conn.prepare(&select_all(table, columns)).unwrap();
        }
    }
}
