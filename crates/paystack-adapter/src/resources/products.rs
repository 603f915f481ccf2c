/*
[INPUT]:  Product names, prices and stock
[OUTPUT]: Product inventory records
[POS]:    Resource layer - /product endpoints
[UPDATE]: When product endpoints change
*/

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{CreateProduct, ListParams, Product, UpdateProduct};
use crate::validate;

resource!(
    /// Product inventory
    Products
);

impl<X: Transport> Products<'_, X> {
    /// POST /product
    pub fn create(&self, params: &CreateProduct) -> X::Output<Product> {
        let request = validate::amount(params.price)
            .and_then(|_| ApiRequest::post("/product").json(params));
        self.transport.dispatch(request)
    }

    /// GET /product?perPage=..&page=..
    pub fn list(&self, params: &ListParams) -> X::Output<Vec<Product>> {
        self.transport
            .dispatch(Ok(ApiRequest::get(params.to_path("/product", Query::new()))))
    }

    /// GET /product/{id}
    pub fn fetch(&self, id: &str) -> X::Output<Product> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/product/{}", id))))
    }

    /// PUT /product/{id}
    pub fn update(&self, id: &str, params: &UpdateProduct) -> X::Output<Product> {
        let request = validate::optional_amount(params.price)
            .and_then(|_| ApiRequest::put(endpoint!("/product/{}", id)).json(params));
        self.transport.dispatch(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaystackError;
    use crate::resources::Api;
    use crate::resources::test_support::client;
    use crate::types::Currency;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn puff_puff(price: i64) -> CreateProduct {
        CreateProduct {
            name: "Puff Puff".to_string(),
            description: "Crispy flour ball".to_string(),
            price,
            currency: Currency::Ngn,
            unlimited: Some(false),
            quantity: Some(100),
        }
    }

    #[tokio::test]
    async fn test_create_product() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/product"))
            .and(body_json(json!({
                "name": "Puff Puff",
                "description": "Crispy flour ball",
                "price": 5000,
                "currency": "NGN",
                "unlimited": false,
                "quantity": 100
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Product successfully created",
                "data": { "id": 526, "name": "Puff Puff", "price": "5000", "quantity": 100, "product_code": "PROD_8ne9cxutagmtsyz" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let product = client(&server)
            .products()
            .create(&puff_puff(5000))
            .await
            .expect("create should succeed")
            .data
            .expect("product");

        assert_eq!(product.price, Some(5000));
        assert_eq!(product.product_code.as_deref(), Some("PROD_8ne9cxutagmtsyz"));
    }

    #[tokio::test]
    async fn test_zero_price_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server)
            .products()
            .create(&puff_puff(0))
            .await
            .expect_err("price must be positive");

        assert!(matches!(err, PaystackError::InvalidAmount(0)));
    }
}
