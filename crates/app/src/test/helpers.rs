//! Test Helpers

use crate::{
    domain::{
        products::{ProductsService, ProductsServiceError, data::NewProduct, records::ProductRecord},
        users::{UsersService, UsersServiceError, data::NewUser, records::UserUuid},
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            name: name.to_owned(),
            image1: "http://localhost:4000/images/product_1.png".to_owned(),
            image2: "http://localhost:4000/images/product_2.png".to_owned(),
            image3: "http://localhost:4000/images/product_3.png".to_owned(),
            category: "women".to_owned(),
            new_price: 50.0,
            old_price: 80.5,
        })
        .await
}

pub(crate) async fn signup(
    ctx: &TestContext,
    email: &str,
) -> Result<UserUuid, UsersServiceError> {
    ctx.users
        .signup(NewUser {
            username: Some("shopper".to_owned()),
            email: Some(email.to_owned()),
            password: Some("secret".to_owned()),
        })
        .await
        .map(|issued| issued.user)
}
