//! Table definitions for the three seeded tables.
//!
//! Every table carries a store-assigned `"id" SERIAL` primary key. The column
//! lists below are the insertable columns, in the order loaders bind them.

/// Column metadata for an insertable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Column name
    pub name: &'static str,
    /// PostgreSQL column type
    pub sql_type: &'static str,
    /// Whether this column is nullable
    pub nullable: bool,
    /// Referenced `(table, column)` for foreign keys
    pub references: Option<(&'static str, &'static str)>,
    /// Parameter type loaders bind with, when it differs from `sql_type`
    pub bind_type: Option<&'static str>,
}

impl ColumnDefinition {
    const fn required(name: &'static str, sql_type: &'static str) -> Self {
        Self {
            name,
            sql_type,
            nullable: false,
            references: None,
            bind_type: None,
        }
    }

    const fn nullable(name: &'static str, sql_type: &'static str) -> Self {
        Self {
            name,
            sql_type,
            nullable: true,
            references: None,
            bind_type: None,
        }
    }
}

const CUSTOMER_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::required("name", "VARCHAR(255)"),
    ColumnDefinition::required("email", "VARCHAR(255)"),
    ColumnDefinition::required("segment", "VARCHAR(50)"),
    ColumnDefinition::required("country", "VARCHAR(100)"),
];

const PRODUCT_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition::required("name", "VARCHAR(100)"),
    ColumnDefinition::required("category", "VARCHAR(50)"),
    ColumnDefinition::required("price", "NUMERIC(10, 2)"),
    ColumnDefinition::required("stock_quantity", "INTEGER"),
    ColumnDefinition::nullable("description", "TEXT"),
];

const ORDER_COLUMNS: &[ColumnDefinition] = &[
    ColumnDefinition {
        name: "customer_id",
        sql_type: "INTEGER",
        nullable: false,
        references: Some(("customers", "id")),
        // Identities are carried as int8 so an existing BIGSERIAL key fits too
        bind_type: Some("int8"),
    },
    ColumnDefinition::required("order_date", "DATE"),
    ColumnDefinition::required("total_amount", "NUMERIC(10, 2)"),
    ColumnDefinition::required("status", "VARCHAR(50)"),
    ColumnDefinition::nullable("shipping_address", "TEXT"),
];

/// One of the seeded tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Customers,
    Products,
    Orders,
}

impl Table {
    /// All tables in dependency order (referenced tables first).
    pub const ALL: [Table; 3] = [Table::Customers, Table::Products, Table::Orders];

    /// Table name in the store.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Customers => "customers",
            Table::Products => "products",
            Table::Orders => "orders",
        }
    }

    /// Insertable columns (everything except `id`).
    pub fn columns(&self) -> &'static [ColumnDefinition] {
        match self {
            Table::Customers => CUSTOMER_COLUMNS,
            Table::Products => PRODUCT_COLUMNS,
            Table::Orders => ORDER_COLUMNS,
        }
    }

    /// Get the insertable column names.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns().iter().map(|c| c.name).collect()
    }

    /// Generate a `CREATE TABLE IF NOT EXISTS` statement with a serial primary key.
    pub fn create_table_sql(&self) -> String {
        let mut column_defs = vec!["  \"id\" SERIAL PRIMARY KEY".to_string()];
        column_defs.extend(self.columns().iter().map(|column| {
            let null_clause = if column.nullable { "NULL" } else { "NOT NULL" };
            let mut def = format!("  \"{}\" {} {}", column.name, column.sql_type, null_clause);
            if let Some((table, key)) = column.references {
                def.push_str(&format!(" REFERENCES \"{table}\" (\"{key}\")"));
            }
            def
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (\n{}\n)",
            self.name(),
            column_defs.join(",\n")
        )
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customers_table() {
        let sql = Table::Customers.create_table_sql();

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"customers\""));
        assert!(sql.contains("\"id\" SERIAL PRIMARY KEY"));
        assert!(sql.contains("\"email\" VARCHAR(255) NOT NULL"));
        assert!(sql.contains("\"country\" VARCHAR(100) NOT NULL"));
    }

    #[test]
    fn test_create_orders_table_references_customers() {
        let sql = Table::Orders.create_table_sql();

        assert!(sql.contains(
            "\"customer_id\" INTEGER NOT NULL REFERENCES \"customers\" (\"id\")"
        ));
        assert!(sql.contains("\"total_amount\" NUMERIC(10, 2) NOT NULL"));
        assert!(sql.contains("\"shipping_address\" TEXT NULL"));
    }

    #[test]
    fn test_column_order() {
        assert_eq!(
            Table::Products.column_names(),
            vec!["name", "category", "price", "stock_quantity", "description"]
        );
        assert_eq!(Table::ALL[0], Table::Customers);
    }

    #[test]
    fn test_only_foreign_key_overrides_bind_type() {
        let overridden: Vec<_> = Table::ALL
            .iter()
            .flat_map(|t| t.columns())
            .filter_map(|c| c.bind_type.map(|ty| (c.name, ty)))
            .collect();
        assert_eq!(overridden, vec![("customer_id", "int8")]);
    }
}
