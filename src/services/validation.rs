use crate::{
    error::FieldErrors,
    models::{NewOrder, OrderRequest, OrderSide},
};

pub const ORDER_SIDE_MESSAGE: &str = "Order side must be either BUY or SELL";

fn check_length(
    errs: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
    max: usize,
    missing: &str,
    bad_length: &str,
) {
    match value {
        None => {
            errs.insert(field.into(), missing.into());
        }
        Some(v) => {
            let len = v.chars().count();
            if len < 1 || len > max {
                errs.insert(field.into(), bad_length.into());
            }
        }
    }
}

/// Field presence and format checks. Every failing field is reported.
pub fn validate_order(req: OrderRequest) -> Result<NewOrder, FieldErrors> {
    let mut errs = FieldErrors::new();

    check_length(
        &mut errs,
        "ticker",
        &req.ticker,
        4,
        "An order must contain a ticker",
        "Ticker must be between 1 and 4 characters",
    );
    check_length(
        &mut errs,
        "currency",
        &req.currency,
        3,
        "An order must contain currency",
        "Currency must be between 1 and 3 characters",
    );

    let side = match req.order_side.as_deref().map(str::parse::<OrderSide>) {
        Some(Ok(side)) => Some(side),
        None | Some(Err(_)) => {
            errs.insert("orderSide".into(), ORDER_SIDE_MESSAGE.into());
            None
        }
    };

    match req.volume {
        None => {
            errs.insert("volume".into(), "An order must specify volume".into());
        }
        Some(v) if v <= 0 => {
            errs.insert("volume".into(), "Volume must be positive".into());
        }
        Some(_) => {}
    }

    match req.price {
        None => {
            errs.insert("price".into(), "An order must contain price information".into());
        }
        Some(p) if !(p >= 0.0) => {
            errs.insert("price".into(), "Price must be greater than or equal to 0".into());
        }
        Some(_) => {}
    }

    match (req.ticker, side, req.volume, req.price, req.currency) {
        (Some(ticker), Some(side), Some(volume), Some(price), Some(currency)) if errs.is_empty() => {
            Ok(NewOrder {
                ticker,
                side,
                volume,
                price,
                currency,
            })
        }
        _ => Err(errs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> OrderRequest {
        OrderRequest {
            ticker: Some("SAVE".into()),
            order_side: Some("BUY".into()),
            volume: Some(100),
            price: Some(235.0),
            currency: Some("SEK".into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_request_becomes_new_order() {
        let order = validate_order(valid()).unwrap();
        assert_eq!(order.ticker, "SAVE");
        assert_eq!(order.side, OrderSide::Buy);
        assert_eq!(order.volume, 100);
        assert_eq!(order.price, 235.0);
        assert_eq!(order.currency, "SEK");
    }

    #[test]
    fn zero_price_is_allowed() {
        let req = OrderRequest { price: Some(0.0), ..valid() };
        assert!(validate_order(req).is_ok());
    }

    #[test]
    fn missing_fields_are_reported() {
        let errs = validate_order(OrderRequest::default()).unwrap_err();

        assert_eq!(errs["ticker"], "An order must contain a ticker");
        assert_eq!(errs["orderSide"], ORDER_SIDE_MESSAGE);
        assert_eq!(errs["volume"], "An order must specify volume");
        assert_eq!(errs["price"], "An order must contain price information");
        assert_eq!(errs["currency"], "An order must contain currency");
    }

    #[test]
    fn out_of_range_values_are_reported() {
        let req = OrderRequest {
            ticker: Some("TOOLONG".into()),
            order_side: Some("HOLD".into()),
            volume: Some(0),
            price: Some(-1.0),
            currency: Some("".into()),
            ..Default::default()
        };

        let errs = validate_order(req).unwrap_err();

        assert_eq!(errs.len(), 5);
        assert_eq!(errs["ticker"], "Ticker must be between 1 and 4 characters");
        assert_eq!(errs["orderSide"], ORDER_SIDE_MESSAGE);
        assert_eq!(errs["volume"], "Volume must be positive");
        assert_eq!(errs["price"], "Price must be greater than or equal to 0");
        assert_eq!(errs["currency"], "Currency must be between 1 and 3 characters");
    }

    #[test]
    fn lowercase_side_is_rejected() {
        let req = OrderRequest { order_side: Some("sell".into()), ..valid() };
        let errs = validate_order(req).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs.contains_key("orderSide"));
    }
}
