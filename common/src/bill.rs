//! 割り勘計算
//!
//! 入力3つ（金額・チップ率・人数）だけの純粋な計算。内部では
//! 丸めず、2桁への丸めは表示側（view.rs）でのみ行う。

/// チップ率のプリセット（%）。自由入力も可
pub const TIP_PRESETS: &[f64] = &[0.0, 15.0, 18.0, 20.0];

/// 割り勘の入力
#[derive(Debug, Clone, Copy)]
pub struct BillSplit {
    /// 基準金額（注文合計を初期値にするが、以後は独立に編集可能）
    pub bill_base: f64,
    /// チップ率（%）
    pub tip_percent: f64,
    /// 人数（1未満は1に切り上げ）
    pub party_count: u32,
}

/// 1人あたりの内訳
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillBreakdown {
    pub tip_amount: f64,
    pub grand_total: f64,
    pub per_person_total: f64,
    pub per_person_bill_share: f64,
    pub per_person_tip_share: f64,
}

impl BillSplit {
    pub fn new(bill_base: f64, tip_percent: f64, party_count: u32) -> Self {
        Self {
            bill_base: bill_base.max(0.0),
            tip_percent,
            party_count: party_count.max(1),
        }
    }

    /// 内訳を計算
    pub fn breakdown(&self) -> BillBreakdown {
        let party = f64::from(self.party_count.max(1));
        let tip_amount = self.bill_base * self.tip_percent / 100.0;
        let grand_total = self.bill_base + tip_amount;

        BillBreakdown {
            tip_amount,
            grand_total,
            per_person_total: grand_total / party,
            per_person_bill_share: self.bill_base / party,
            per_person_tip_share: tip_amount / party,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_breakdown_basic() {
        let split = BillSplit::new(100.0, 18.0, 4);
        let b = split.breakdown();

        assert!((b.tip_amount - 18.0).abs() < EPS);
        assert!((b.grand_total - 118.0).abs() < EPS);
        assert!((b.per_person_total - 29.5).abs() < EPS);
        assert!((b.per_person_bill_share - 25.0).abs() < EPS);
        assert!((b.per_person_tip_share - 4.5).abs() < EPS);
    }

    #[test]
    fn test_party_of_one_equals_grand_total() {
        let split = BillSplit::new(87.3, 15.0, 1);
        let b = split.breakdown();

        assert!((b.per_person_total - b.grand_total).abs() < EPS);
        assert!((b.per_person_total - 87.3 * 1.15).abs() < EPS);
    }

    #[test]
    fn test_party_count_clamped_to_one() {
        let split = BillSplit::new(50.0, 0.0, 0);
        assert_eq!(split.party_count, 1);

        let b = split.breakdown();
        assert!((b.per_person_total - 50.0).abs() < EPS);
    }

    #[test]
    fn test_zero_tip() {
        let split = BillSplit::new(60.0, 0.0, 3);
        let b = split.breakdown();

        assert_eq!(b.tip_amount, 0.0);
        assert!((b.grand_total - 60.0).abs() < EPS);
        assert!((b.per_person_total - 20.0).abs() < EPS);
        assert_eq!(b.per_person_tip_share, 0.0);
    }

    #[test]
    fn test_negative_base_clamped() {
        let split = BillSplit::new(-10.0, 15.0, 2);
        assert_eq!(split.bill_base, 0.0);
        assert_eq!(split.breakdown().grand_total, 0.0);
    }

    #[test]
    fn test_free_tip_value() {
        // プリセット外の自由入力
        let split = BillSplit::new(200.0, 7.5, 2);
        let b = split.breakdown();
        assert!((b.tip_amount - 15.0).abs() < EPS);
        assert!((b.per_person_total - 107.5).abs() < EPS);
    }

    #[test]
    fn test_tip_presets() {
        assert_eq!(TIP_PRESETS, &[0.0, 15.0, 18.0, 20.0]);
    }
}
