//! 预导入模块，方便使用

pub use super::companies::{
    ActiveModel as CompanyActiveModel, Entity as Companies, Model as CompanyModel,
};
pub use super::inquiries::{
    ActiveModel as InquiryActiveModel, Entity as Inquiries, Model as InquiryModel,
};
pub use super::inquiry_messages::{
    ActiveModel as InquiryMessageActiveModel, Entity as InquiryMessages,
    Model as InquiryMessageModel,
};
pub use super::news::{ActiveModel as NewsActiveModel, Entity as News, Model as NewsModel};
pub use super::price_trends::{
    ActiveModel as PriceTrendActiveModel, Entity as PriceTrends, Model as PriceTrendModel,
};
pub use super::products::{
    ActiveModel as ProductActiveModel, Entity as Products, Model as ProductModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
