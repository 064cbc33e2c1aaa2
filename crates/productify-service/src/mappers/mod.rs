//! Entity-DTO mappers.

use crate::dto::{
    CategoryDto, CreateCategoryDto, CreateProductDto, ProductDto, UpdateCategoryDto,
    UpdateProductDto,
};
use productify_core::{ApplyTo, Category, Product};

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<CreateCategoryDto> for Category {
    fn from(dto: CreateCategoryDto) -> Self {
        Category::new(dto.name)
    }
}

impl ApplyTo<Category> for UpdateCategoryDto {
    fn apply_to(self, target: &mut Category) {
        target.name = self.name;
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let category_name = product.category_name().unwrap_or_default().to_string();
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category_name,
        }
    }
}

impl From<CreateProductDto> for Product {
    fn from(dto: CreateProductDto) -> Self {
        Product::new(dto.name, dto.price, dto.category_id)
    }
}

impl ApplyTo<Product> for UpdateProductDto {
    fn apply_to(self, target: &mut Product) {
        target.name = self.name;
        target.price = self.price;
        target.move_to(self.category_id);
    }
}
