pub mod error;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod page {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod provider {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod stats {
    pub mod routes;
}
pub mod session {
    pub mod dto;
    pub mod routes;
}
pub mod feed {
    pub mod error_mapper;
    pub mod routes;
}
pub mod weather {
    pub mod error_mapper;
    pub mod routes;
}
pub mod news {
    pub mod error_mapper;
    pub mod routes;
}
