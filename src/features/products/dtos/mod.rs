mod product_dto;

pub use product_dto::{
    CreateProductDto, DeleteProductResponseDto, ProductResponseDto, UpdateProductDto,
};
