//! Clause parsers, one per module, all implemented on `ClauseParser`.

mod group_by;
mod having;
mod insert_columns;
mod insert_duplicate;
mod insert_into;
mod insert_set;
mod insert_values;
mod limit;
mod order_by;
mod select_list;
mod select_rest;
mod table_references;
mod where_clause;
