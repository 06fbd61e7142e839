mod department_delete_test;
mod helpers;
mod position_delete_test;
mod router_test;
mod sentinel_test;
