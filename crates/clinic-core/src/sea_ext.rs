use sea_orm::{Order, QueryOrder, sea_query::IntoColumnRef};

use clinic_domain::sort::Sort;

/// Order a query by a column in a runtime-chosen direction.
pub trait OrderBySort: QueryOrder {
    fn order_by_sort<C>(self, col: C, sort: Sort) -> Self
    where
        C: IntoColumnRef;
}

impl<Q> OrderBySort for Q
where
    Q: QueryOrder,
{
    fn order_by_sort<C>(mut self, col: C, sort: Sort) -> Self
    where
        C: IntoColumnRef,
    {
        let order = match sort {
            Sort::Asc => Order::Asc,
            Sort::Desc => Order::Desc,
        };
        QueryOrder::query(&mut self).order_by(col, order);
        self
    }
}
