//! Static advisory content shown next to prediction results.

/// How strongly a feature drives the income estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    VeryHigh,
    High,
    Medium,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Очень высокий",
            Self::High => "Высокий",
            Self::Medium => "Средний",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureInsight {
    pub display_name: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub recommendation: &'static str,
    pub business_value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub audience: &'static str,
    pub benefit: &'static str,
    pub key_features: [&'static str; 3],
}

pub const TOP_FEATURES_TITLE: &str = "Топ-5 важных признаков";
pub const TOP_FEATURES_TAG: &str = "Для менеджеров";
pub const TOP_FEATURES_INTRO: &str = "Эти признаки наиболее влияют на точность прогноза дохода клиента. Проверьте их полноту в датасете для более точных предсказаний.";

pub const PRODUCTS_TITLE: &str = "Рекомендации по развитию продуктов";
pub const PRODUCTS_TAG: &str = "Стратегия роста";
pub const PRODUCTS_INTRO: &str = "На основе анализа ключевых признаков модели предлагаем продуктовые решения для увеличения доходности и удержания клиентов.";

pub const TOP_FEATURES: [FeatureInsight; 5] = [
    FeatureInsight {
        display_name: "Средний оборот по активным кредитам",
        description: "Среднемесячные обороты по действующим кредитным картам и счетам",
        impact: Impact::High,
        recommendation: "Основной индикатор платежеспособности клиента",
        business_value: "Показывает уровень финансовой активности и доступные средства",
    },
    FeatureInsight {
        display_name: "Средняя зарплата за 6-12 месяцев",
        description: "Усредненные зарплатные поступления за последние полгода-год",
        impact: Impact::VeryHigh,
        recommendation: "Критичный признак для оценки стабильного дохода",
        business_value: "Отражает текущий уровень доходов и их стабильность",
    },
    FeatureInsight {
        display_name: "Первая зарплата клиента",
        description: "Сумма первой зафиксированной зарплаты в системе",
        impact: Impact::High,
        recommendation: "Базовая точка для расчета динамики доходов",
        business_value: "Позволяет оценить рост доходов клиента за период сотрудничества",
    },
    FeatureInsight {
        display_name: "Декларируемый доход",
        description: "Уровень дохода, заявленный клиентом при оформлении продуктов",
        impact: Impact::High,
        recommendation: "Сопоставляется с фактическими данными для верификации",
        business_value: "Помогает выявить расхождения между заявленным и реальным доходом",
    },
    FeatureInsight {
        display_name: "Максимальный кредитный лимит (БКИ)",
        description: "Максимальный суммарный лимит по данным Бюро кредитных историй",
        impact: Impact::Medium,
        recommendation: "Отражает доверие других банков к клиенту",
        business_value: "Косвенный показатель кредитоспособности и истории платежей",
    },
];

pub const PRODUCT_RECOMMENDATIONS: [ProductRecommendation; 5] = [
    ProductRecommendation {
        title: "Кредитные продукты с гибкими лимитами",
        description: "Персональные кредитные карты и овердрафты с индивидуальным лимитом",
        icon: "💳",
        audience: "Клиенты с высоким оборотом по активным кредитам",
        benefit: "Увеличение кредитного портфеля и лояльности",
        key_features: [
            "Персональный расчет лимита на основе оборотов",
            "Гибкие условия погашения",
            "Автоматическое увеличение лимита при росте доходов",
        ],
    },
    ProductRecommendation {
        title: "Рефинансирование или консолидация кредитов",
        description: "Объединение кредитов с выгодными условиями для снижения платежной нагрузки",
        icon: "🔄",
        audience: "Клиенты с высоким историческим лимитом или активными кредитами",
        benefit: "Снижение оттока клиентов, рост удержания",
        key_features: [
            "Консолидация всех кредитов в один платеж",
            "Снижение ставки на основе кредитной истории",
            "Увеличение срока погашения для комфортных платежей",
        ],
    },
    ProductRecommendation {
        title: "Персональные потребительские кредиты под доход",
        description: "Целевые кредиты с дифференцированной ставкой в зависимости от уровня дохода",
        icon: "💰",
        audience: "Клиенты со стабильной средней зарплатой",
        benefit: "Рост кредитного портфеля с минимальным риском",
        key_features: [
            "Ставка привязана к среднему доходу за 6-12 месяцев",
            "Быстрое одобрение для проверенных клиентов",
            "Отсутствие скрытых комиссий",
        ],
    },
    ProductRecommendation {
        title: "Премиальные или зарплатные пакеты обслуживания",
        description: "Эксклюзивные тарифы с кешбэком, премиум-картами и инвестиционными сервисами",
        icon: "⭐",
        audience: "Клиенты со стабильными оборотами и высокой зарплатой",
        benefit: "Увеличение комиссионных доходов и удержание VIP-клиентов",
        key_features: [
            "Повышенный кешбэк по всем категориям",
            "Доступ к бизнес-залам и консьерж-сервису",
            "Персональный менеджер и инвестиционные консультации",
        ],
    },
    ProductRecommendation {
        title: "Инвестиционные и накопительные решения",
        description: "ИИС, накопительные счета и структурные продукты для роста капитала",
        icon: "📈",
        audience: "Клиенты с высоким и стабильным доходом",
        benefit: "Рост комиссионного дохода, увеличение AUM",
        key_features: [
            "Индивидуальные инвестиционные стратегии",
            "Налоговые вычеты по ИИС до 52 000 ₽",
            "Диверсифицированные портфели с защитой капитала",
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn panels_have_five_unique_entries() {
        let names: HashSet<_> = TOP_FEATURES.iter().map(|f| f.display_name).collect();
        assert_eq!(names.len(), 5);
        let titles: HashSet<_> = PRODUCT_RECOMMENDATIONS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), 5);
    }

    #[test]
    fn salary_is_the_strongest_feature() {
        let strongest: Vec<_> = TOP_FEATURES
            .iter()
            .filter(|f| f.impact == Impact::VeryHigh)
            .map(|f| f.display_name)
            .collect();
        assert_eq!(strongest, ["Средняя зарплата за 6-12 месяцев"]);
    }
}
