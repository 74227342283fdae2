//! Syntax fragments the router extracts from SQL statements.

mod condition;
mod expression;
mod insert_value;
mod item;
mod limit;
mod table;

pub use condition::{Column, ConditionValue, RouteCondition, ShardingOperator};
pub use expression::{Expression, SqlExpression, exactly_value};
pub use insert_value::{InsertValue, InsertValuesKind};
pub use item::{
    AggregationSelectItem, AggregationType, CommonSelectItem, DerivedColumn, DistinctSelectItem,
    OrderDirection, OrderItem, SelectItem,
};
pub use limit::{Limit, LimitValue};
pub use table::{Table, Tables};
