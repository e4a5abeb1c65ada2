use gelato_types::{OrderStatus, StopLimitOrder};

/// The orders of one owner, grouped by effective status.
///
/// Each group is sorted by last update, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    /// Open orders that can still execute.
    pub open: Vec<StopLimitOrder>,
    /// Cancelled orders.
    pub cancelled: Vec<StopLimitOrder>,
    /// Executed orders.
    pub executed: Vec<StopLimitOrder>,
    /// Open orders that can no longer execute.
    pub expired: Vec<StopLimitOrder>,
}

impl OrderHistory {
    /// Group orders by [`StopLimitOrder::status`].
    pub fn from_orders<I>(orders: I) -> Self
    where
        I: IntoIterator<Item = StopLimitOrder>,
    {
        let mut history = Self::default();
        for order in orders {
            match order.status() {
                OrderStatus::Open => history.open.push(order),
                OrderStatus::Cancelled => history.cancelled.push(order),
                OrderStatus::Executed => history.executed.push(order),
                OrderStatus::Expired => history.expired.push(order),
            }
        }
        for group in
            [&mut history.open, &mut history.cancelled, &mut history.executed, &mut history.expired]
        {
            group.sort_by_key(|order| core::cmp::Reverse(order.updated_at()));
        }
        history
    }

    /// Total number of orders.
    pub fn len(&self) -> usize {
        self.open.len() + self.cancelled.len() + self.executed.len() + self.expired.len()
    }

    /// True if there are no orders.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gelato_types::Order;

    fn order(status: OrderStatus, updated_at: u64, is_expired: bool) -> StopLimitOrder {
        StopLimitOrder {
            order: Order { status, updated_at: Some(updated_at), ..Default::default() },
            max_return: None,
            is_expired,
        }
    }

    #[test]
    fn groups_and_sorts() {
        let history = OrderHistory::from_orders([
            order(OrderStatus::Open, 10, false),
            order(OrderStatus::Open, 30, false),
            order(OrderStatus::Open, 20, true),
            order(OrderStatus::Cancelled, 5, true),
            order(OrderStatus::Executed, 7, false),
            order(OrderStatus::Open, 40, true),
        ]);

        assert_eq!(history.len(), 6);
        let times =
            |group: &[StopLimitOrder]| group.iter().map(|o| o.updated_at()).collect::<Vec<_>>();
        assert_eq!(times(&history.open), [30, 10]);
        assert_eq!(times(&history.expired), [40, 20]);
        // expiry only applies to open orders
        assert_eq!(times(&history.cancelled), [5]);
        assert_eq!(times(&history.executed), [7]);
    }

    #[test]
    fn empty() {
        assert!(OrderHistory::from_orders(Vec::new()).is_empty());
    }
}
