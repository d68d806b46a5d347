//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use shopfront_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::MockCartsService, images::MockImagesService, products::MockProductsService,
        subscriptions::MockSubscriptionsService, users::MockUsersService,
        users::records::UserUuid,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// Service mocks backing a test [`State`].
///
/// Every mock starts without expectations, so any call a test did not set up
/// fails loudly.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) subscriptions: MockSubscriptionsService,
    pub(crate) users: MockUsersService,
    pub(crate) carts: MockCartsService,
    pub(crate) images: MockImagesService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext::from_services(
            Arc::new(self.products),
            Arc::new(self.subscriptions),
            Arc::new(self.users),
            Arc::new(self.carts),
            Arc::new(self.images),
            Arc::new(self.auth),
        ))
    }

    /// Serve `route` with these mocks injected.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }

    /// Serve `route` as if [`TEST_USER_UUID`] had already authenticated.
    pub(crate) fn authenticated_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}
